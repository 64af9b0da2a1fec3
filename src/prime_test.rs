use num::{BigUint, One, Zero};

/// Trait for algorithms to test whether a specified number is prime.
pub trait PrimeTest<P> {
    /// Test whether the given numeral is a prime number
    fn is_prime(number: &P) -> bool;
}

/// Primality testing by exhaustive trial division: a number is prime unless some integer in
/// `[2, number)` divides it evenly. The search is linear in the candidate, which is acceptable for
/// the small and moderate moduli this crate generates vectors for; callers with large candidates
/// should substitute a probabilistic test behind the same trait.
pub struct TrialDivision;

impl PrimeTest<BigUint> for TrialDivision {
    fn is_prime(number: &BigUint) -> bool {
        if *number <= BigUint::one() {
            return false;
        }

        // for number == 2 the divisor range is empty and the candidate passes
        let mut divisor = BigUint::from(2u8);
        while divisor < *number {
            if (number % &divisor).is_zero() {
                return false;
            }
            divisor += BigUint::one();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint(value: u64) -> BigUint {
        BigUint::from(value)
    }

    #[test]
    fn test_small_candidates() {
        assert!(!TrialDivision::is_prime(&uint(0)));
        assert!(!TrialDivision::is_prime(&uint(1)));
        assert!(TrialDivision::is_prime(&uint(2)));
        assert!(TrialDivision::is_prime(&uint(3)));
        assert!(!TrialDivision::is_prime(&uint(4)));
        assert!(TrialDivision::is_prime(&uint(17)));
    }

    #[test]
    fn test_composite_candidates() {
        assert!(!TrialDivision::is_prime(&uint(91)));
        assert!(!TrialDivision::is_prime(&uint(561)));
    }

    #[test]
    fn test_larger_prime() {
        assert!(TrialDivision::is_prime(&uint(8191)))
    }
}
