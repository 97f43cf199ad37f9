//! # Fractions
//!
//! Exact rational arithmetic in Rust.
//!
//! Every fraction is kept in lowest terms with a positive denominator, so
//! equality is structural and results are canonical.
//!
//! ## Features
//!
//! - **Checked Machine Fractions**: `Fraction` stores `i64` fields and
//!   reports overflow instead of wrapping
//! - **Arbitrary Precision**: `BigFraction` stores `dashu` integers and
//!   never overflows
//! - **Text and Serde**: canonical `n/d` form, strict parsing, and a
//!   `{"numerator", "denominator"}` interchange format
//! - **Float Conversion**: decimal rounding in both directions
//!
//! ## Quick Start
//!
//! ```rust
//! use fractions::prelude::*;
//!
//! let half = Fraction::new(1, 2)?;
//! let third: Fraction = "1/3".parse()?;
//!
//! assert_eq!((half + third).to_string(), "5/6");
//! assert!(third < half);
//! assert_eq!(Fraction::new(1, 0), Err(FractionError::DivisionByZero));
//! # Ok::<(), FractionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use fractions_integers as integers;
pub use fractions_ratio as ratio;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fractions_integers::{Integer, Integral};
    pub use fractions_ratio::{BigFraction, FloatConversion, Fraction, FractionError, Ratio};
    pub use num_traits::{One, Zero};
}
