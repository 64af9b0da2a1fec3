//! A thin command line front-end over the arithmetic engines, used to produce reference test
//! vectors. It parses the textual operands, invokes exactly one engine operation and prints the
//! result as a fixed-width hexadecimal string padded to a 32-byte word layout. All failures are
//! reported on stderr with exit code 1 and never produce output on stdout.

use std::env;
use std::process;

use num::BigUint;

use cipher_maths::gf256;
use cipher_maths::prime;
use cipher_maths::prime_test::{PrimeTest, TrialDivision};

/// The set of operations exposed on the command line. The textual selector is translated into
/// this type at the boundary, so everything past argument parsing is typed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Operation {
    RotateWord,
    IsPrime,
    Add,
    Sub,
    Mul,
    Inverse,
    Div,
}

impl Operation {
    fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "RotWord" => Some(Operation::RotateWord),
            "isPrime" => Some(Operation::IsPrime),
            "add" => Some(Operation::Add),
            "sub" => Some(Operation::Sub),
            "mul" => Some(Operation::Mul),
            "mulInv" => Some(Operation::Inverse),
            "div" => Some(Operation::Div),
            _ => None,
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("usage: {} <operation> <operands...>", args[0]);
        process::exit(1);
    }

    let operation = match Operation::from_selector(&args[1]) {
        Some(operation) => operation,
        None => {
            eprintln!("unknown operation: {}", args[1]);
            process::exit(1);
        }
    };

    match evaluate(operation, &args[2..]) {
        Ok(output) => println!("{}", output),
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    }
}

/// Evaluate one operation on its textual operands and render the padded hexadecimal output.
fn evaluate(operation: Operation, operands: &[String]) -> Result<String, String> {
    match operation {
        Operation::RotateWord => {
            let word = parse_word(operand(operands, 0)?)?;
            let rotated = gf256::rotate_word(&word).map_err(|error| error.to_string())?;
            Ok(format_word(&rotated))
        }
        Operation::IsPrime => {
            let candidate = parse_integer(operand(operands, 0)?)?;
            Ok(format_flag(TrialDivision::is_prime(&candidate)))
        }
        Operation::Inverse => {
            // historical calling convention: the operand between a and the modulus is a
            // placeholder and must be skipped when present
            if operands.len() < 2 {
                return Err("missing modulus operand".into());
            }
            let a = parse_integer(operand(operands, 0)?)?;
            let modulus = parse_integer(operand(operands, operands.len() - 1)?)?;
            let inverse =
                prime::modular_inverse(&a, &modulus).map_err(|error| error.to_string())?;
            Ok(format_field_element(&inverse))
        }
        Operation::Add | Operation::Sub | Operation::Mul | Operation::Div => {
            let a = parse_integer(operand(operands, 0)?)?;
            let b = parse_integer(operand(operands, 1)?)?;
            let modulus = parse_integer(operand(operands, 2)?)?;

            let result = match operation {
                Operation::Add => prime::add(&a, &b, &modulus),
                Operation::Sub => prime::sub(&a, &b, &modulus),
                Operation::Mul => prime::mul(&a, &b, &modulus),
                Operation::Div => prime::div(&a, &b, &modulus),
                _ => unreachable!(),
            };
            Ok(format_field_element(&result.map_err(|error| error.to_string())?))
        }
    }
}

fn operand(operands: &[String], index: usize) -> Result<&str, String> {
    operands
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| format!("missing operand at position {}", index + 1))
}

/// Parse a `0x`-prefixed hexadecimal word operand. Only the first four bytes after the prefix
/// take part in the rotation; trailing padding bytes are ignored.
fn parse_word(operand: &str) -> Result<Vec<u8>, String> {
    let digits = operand
        .strip_prefix("0x")
        .ok_or_else(|| format!("word operand must start with 0x: {}", operand))?;

    let digits = if digits.len() > 8 { &digits[..8] } else { digits };
    hex::decode(digits).map_err(|error| format!("malformed word operand: {}", error))
}

fn parse_integer(operand: &str) -> Result<BigUint, String> {
    operand
        .parse()
        .map_err(|_| format!("malformed decimal operand: {}", operand))
}

/// Render a rotated word as `0x`, the four word bytes and 28 zero bytes of padding, matching the
/// 32-byte word layout of the consuming test harness.
fn format_word(word: &[u8; 4]) -> String {
    format!("0x{}{}", hex::encode(word), "0".repeat(56))
}

/// Render a field element as `0x` followed by 64 zero-padded big-endian hex digits.
fn format_field_element(element: &BigUint) -> String {
    format!("0x{:064x}", element)
}

fn format_flag(flag: bool) -> String {
    format!("0x{:064x}", u8::from(flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word_truncates_padding() {
        let operand = "0x0102030405060708";
        assert_eq!(vec![0x01, 0x02, 0x03, 0x04], parse_word(operand).unwrap())
    }

    #[test]
    fn test_parse_word_rejects_missing_prefix() {
        assert!(parse_word("01020304").is_err())
    }

    #[test]
    fn test_rotated_word_layout() {
        let word = parse_word("0x12345678").unwrap();
        let rotated = gf256::rotate_word(&word).unwrap();
        assert_eq!(
            "0x3456781200000000000000000000000000000000000000000000000000000000",
            format_word(&rotated)
        )
    }

    #[test]
    fn test_field_element_padding() {
        assert_eq!(
            "0x0000000000000000000000000000000000000000000000000000000000000002",
            format_field_element(&BigUint::from(2u8))
        )
    }

    #[test]
    fn test_inverse_skips_placeholder_operand() {
        let operands: Vec<String> = vec!["3".into(), "0".into(), "11".into()];
        assert_eq!(
            "0x0000000000000000000000000000000000000000000000000000000000000004",
            evaluate(Operation::Inverse, &operands).unwrap()
        )
    }

    #[test]
    fn test_prime_flag_output() {
        let operands: Vec<String> = vec!["17".into()];
        assert_eq!(
            "0x0000000000000000000000000000000000000000000000000000000000000001",
            evaluate(Operation::IsPrime, &operands).unwrap()
        )
    }
}
