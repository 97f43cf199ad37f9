//! # fractions-ratio
//!
//! Exact, always-normalized fractions.
//!
//! This crate provides:
//! - `Ratio<T>`, a fraction over any [`Integral`](fractions_integers::Integral) type
//! - `Fraction`, the `i64` instance, whose operations report overflow
//! - `BigFraction`, the arbitrary precision instance, which never overflows
//!
//! ## Invariants
//!
//! Every value is in lowest terms with a strictly positive denominator.
//! Zero is `0/1`. Two fractions are equal exactly when their fields are.
//!
//! ## Errors
//!
//! Fallible operations return [`FractionError`]. The arithmetic operators
//! panic on the same conditions, matching the built-in integer operators.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cmp;
pub mod error;
pub mod float;
pub mod fmt;
pub mod ops;
pub mod parse;
pub mod ratio;
pub mod serialize;

#[cfg(test)]
mod proptests;

pub use error::{FractionError, Result};
pub use float::FloatConversion;
pub use ratio::{BigFraction, Fraction, Ratio};
