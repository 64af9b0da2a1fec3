//! A crate containing the arithmetic primitives behind a set of block cipher reference test
//! vectors: round-constant generation and word rotation in `GF(2^8)`, and modular arithmetic over
//! arbitrary-precision prime fields. All operations are pure functions without shared state, so
//! they can be called concurrently without any synchronization.

pub mod error;
pub mod gf256;
pub mod prime;
pub mod prime_test;

pub use error::ArithmeticError;
