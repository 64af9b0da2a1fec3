use num::BigUint;
use thiserror::Error;

/// Errors raised by the arithmetic engines. Every operation reports its failure to the immediate
/// caller; no operation logs, prints or substitutes a default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// An operand was malformed, e.g. a word that is not exactly four bytes long or a
    /// round-constant count of zero.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The divisor was congruent to zero modulo the field prime.
    #[error("division by zero modulo {0}")]
    DivisionByZero(BigUint),

    /// The operand has no multiplicative inverse because it shares a common divisor with the
    /// modulus. This includes operands congruent to zero.
    #[error("{0} has no multiplicative inverse modulo {1}")]
    InvalidInverse(BigUint, BigUint),

    /// The modulus was smaller than two, so it spans no residue field at all.
    #[error("invalid modulus {0}, must be greater than 1")]
    InvalidModulus(BigUint),
}
