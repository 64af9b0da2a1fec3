//! Arithmetic in `GF(2^8)` as used by the AES key schedule. Field elements are octets whose bit
//! `i` holds the coefficient of `x^i`; multiplication by `x` is a left shift followed by reduction
//! modulo the fixed irreducible polynomial.

use crate::error::ArithmeticError;

/// The AES irreducible polynomial `x^8 + x^4 + x^3 + x + 1`. All reductions in this module happen
/// modulo this polynomial.
pub const IRREDUCIBLE_POLYNOMIAL: u16 = 0x11B;

/// Seed for the round-constant recurrence. It sits at position zero, outside the 1-indexed public
/// sequence, and is chosen so that a single doubling step yields `r_con(1) = 0x01`:
/// `0x8D * 0x02 = 0x11A ≡ 0x01 (mod 0x11B)`.
const ROUND_CONSTANT_SEED: u8 = 0x8D;

/// Generate the first ``count`` round constants of the key schedule, where the `i`-th constant
/// (1-indexed) equals `X^i mod (x^8 + x^4 + x^3 + x + 1)`. Each constant is obtained from its
/// predecessor by doubling in `GF(2^8)`: the octet is widened and shifted left, and if the high
/// bit of the predecessor was set, the overflowing product is reduced by the irreducible
/// polynomial before truncating back to eight bits.
///
/// Fails with `InvalidInput` if ``count`` is zero. The output is a pure function of ``count``.
pub fn round_constants(count: usize) -> Result<Vec<u8>, ArithmeticError> {
    if count < 1 {
        return Err(ArithmeticError::InvalidInput(
            "round constant count must be at least 1".into(),
        ));
    }

    let mut constants = Vec::with_capacity(count);
    let mut previous = ROUND_CONSTANT_SEED;
    for _ in 0..count {
        let doubled = u16::from(previous) << 1;
        let next = if previous & 0x80 != 0 {
            (doubled ^ IRREDUCIBLE_POLYNOMIAL) as u8
        } else {
            doubled as u8
        };
        constants.push(next);
        previous = next;
    }
    Ok(constants)
}

/// Rotate a four-byte word cyclically to the left by one byte, as the key schedule does between
/// applications of the substitution box. Fails with `InvalidInput` unless ``word`` is exactly four
/// bytes long.
pub fn rotate_word(word: &[u8]) -> Result<[u8; 4], ArithmeticError> {
    if word.len() != 4 {
        return Err(ArithmeticError::InvalidInput(format!(
            "word must be exactly 4 bytes, got {}",
            word.len()
        )));
    }
    Ok([word[1], word[2], word[3], word[0]])
}
