//! # BigNum - Arbitrary-Precision Unsigned Integer Arithmetic
//!
//! A Rust library for unsigned integers whose magnitude is not bounded by a
//! machine-word width.
//!
//! ## Features
//!
//! - **Growable digit storage**: a little-endian buffer of 8-bit digits that
//!   grows and shrinks with the value
//! - **In-place arithmetic**: addition, subtraction, increment, decrement
//!   with carry/borrow propagation across digit boundaries
//! - **Checked subtraction**: magnitude underflow is a recoverable error, not
//!   a crash
//! - **Ordering**: total order between values, partial order against native
//!   integers
//! - **Diagnostic rendering**: a most-significant-first digit iterator and a
//!   `Debug` form like `[2, 1, 0]`
//!
//! ## Quick Start
//!
//! ```rust
//! use bignum::{BigNum, BigNumError};
//!
//! let mut num = BigNum::from_digits_be(&[BigNum::MAX_DIGIT]);
//! num.increment();
//! assert_eq!(num, BigNum::from_digits_be(&[1, 0]));
//!
//! let mut small = BigNum::from_u64(3);
//! let err = small.try_sub_assign(&BigNum::from_u64(200));
//! assert_eq!(err, Err(BigNumError::MagnitudeUnderflow));
//! ```
//!
//! ## Module Overview
//!
//! - [`bignum`] - The `BigNum` type and its arithmetic
//! - [`error`] - Recoverable arithmetic errors

pub mod bignum;
pub mod error;

pub use bignum::{BigNum, Digit};
pub use error::BigNumError;
