//! # fractions-integers
//!
//! The integer layer of the fractions engine.
//!
//! This crate provides:
//! - Arbitrary precision integers (`Integer`), wrapping `dashu`
//! - The `Integral` trait, implemented for `i64` and `Integer`, which is
//!   everything a fraction asks of its numerator and denominator
//!
//! ## Range Notes
//!
//! - `i64` fields exclude `i64::MIN`, so negating a field can never overflow
//! - `Integer` fields are unbounded and checked operations always succeed

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod integral;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use integral::Integral;
