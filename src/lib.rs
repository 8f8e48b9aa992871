//! Twos BigInt \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers stored as native machine words in two's-complement form,
//!   with bitwise logic, shifts, addition, subtraction, multiplication, comparison and hexadecimal rendering.
//!
//! Words are `u32` by default; the `u64-words` feature stores `u64` words instead.

#[macro_use]
mod macros;

mod arith;
mod big_int;
mod big_int_cache;
mod big_int_constants;
mod bitwise;
mod cmp;
mod convert;
mod error;
mod shift;

pub use big_int::{BigInt, ZERO};
pub use big_int_constants::{DoubleWord, Word, WORD_BITS};
pub use error::TryFromBigIntError;
