//! Modular arithmetic over a caller-supplied prime modulus. All operations are pure functions on
//! `BigUint` operands, so moduli are not bounded to machine-word width and no operation can
//! silently overflow. Every operation validates the modulus before touching the operands.
//!
//! The inverse and division operations are only meaningful when the operand is coprime to the
//! modulus. For a prime modulus that holds for every non-zero residue; for a composite modulus the
//! extended Euclidean algorithm detects the violation and reports it instead of returning an
//! incorrect result. Whether the modulus actually is prime is not validated here, callers can
//! check it through [`crate::prime_test::PrimeTest`] beforehand.

use num::{BigUint, One, Zero};

use crate::error::ArithmeticError;

/// Add ``a`` and ``b`` in the field spanned by ``modulus``.
pub fn add(a: &BigUint, b: &BigUint, modulus: &BigUint) -> Result<BigUint, ArithmeticError> {
    check_modulus(modulus)?;
    Ok((a + b) % modulus)
}

/// Subtract ``b`` from ``a`` in the field spanned by ``modulus``. Both operands are reduced into
/// the field before the borrow, so the unsigned intermediate cannot underflow and operands outside
/// `[0, modulus)` remain well-defined.
pub fn sub(a: &BigUint, b: &BigUint, modulus: &BigUint) -> Result<BigUint, ArithmeticError> {
    check_modulus(modulus)?;
    Ok((a % modulus + modulus - b % modulus) % modulus)
}

/// Multiply ``a`` and ``b`` in the field spanned by ``modulus``.
pub fn mul(a: &BigUint, b: &BigUint, modulus: &BigUint) -> Result<BigUint, ArithmeticError> {
    check_modulus(modulus)?;
    Ok((a * b) % modulus)
}

/// Calculate the multiplicative inverse of ``a`` in the field spanned by ``modulus``, i.e. the
/// unique element `x` in `[0, modulus)` with `a * x ≡ 1 (mod modulus)`. The inverse exists
/// precisely when `gcd(a, modulus) == 1`; otherwise the operation fails with `InvalidInverse`.
/// Operands congruent to zero never have an inverse.
pub fn modular_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint, ArithmeticError> {
    check_modulus(modulus)?;
    let residue = a % modulus;

    let (gcd, _, inverse) = extended_greatest_common_divisor(modulus, &residue, modulus);
    if gcd.is_one() {
        Ok(inverse)
    } else {
        Err(ArithmeticError::InvalidInverse(residue, modulus.clone()))
    }
}

/// Divide ``a`` by ``b`` in the field spanned by ``modulus`` by multiplying ``a`` with the
/// multiplicative inverse of ``b``. Fails with `DivisionByZero` if ``b`` is congruent to zero;
/// this is checked before any inversion is attempted.
pub fn div(a: &BigUint, b: &BigUint, modulus: &BigUint) -> Result<BigUint, ArithmeticError> {
    check_modulus(modulus)?;
    if (b % modulus).is_zero() {
        return Err(ArithmeticError::DivisionByZero(modulus.clone()));
    }

    let inverse = modular_inverse(b, modulus)?;
    Ok(a * inverse % modulus)
}

/// A modulus of zero or one spans no residue field, so every operation rejects it up front.
fn check_modulus(modulus: &BigUint) -> Result<(), ArithmeticError> {
    if *modulus <= BigUint::one() {
        Err(ArithmeticError::InvalidModulus(modulus.clone()))
    } else {
        Ok(())
    }
}

/// The extended euclidean algorithm on ``a`` and ``b`` with the Bézout coefficients calculated
/// modulo ``modulus``. Returns the triple `(gcd, s, t)` satisfying
/// `s * a + t * b ≡ gcd (mod modulus)`. Keeping the coefficients inside the field avoids signed
/// intermediates, so the whole computation stays within `BigUint`.
fn extended_greatest_common_divisor(
    a: &BigUint,
    b: &BigUint,
    modulus: &BigUint,
) -> (BigUint, BigUint, BigUint) {
    if b.is_zero() {
        (a.clone(), BigUint::one(), BigUint::zero())
    } else {
        let (gcd, s, t) = extended_greatest_common_divisor(b, &(a % b), modulus);
        let delta = (a / b) * &t % modulus;
        // both terms are already reduced, so adding the modulus prevents any underflow
        let coefficient = (modulus + &s - &delta) % modulus;
        (gcd, t, coefficient)
    }
}
