//! Parsing of the textual form.
//!
//! The grammar is `-?[0-9]+(/[0-9]+)?`: an optionally negative numerator
//! and an optional unsigned denominator. Whitespace and `+` signs are not
//! accepted.

use fractions_integers::Integral;
use std::str::FromStr;

use crate::error::{FractionError, Result};
use crate::Ratio;

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_numerator(text: &str) -> bool {
    is_digits(text.strip_prefix('-').unwrap_or(text))
}

// The text was validated, so a parse failure can only mean the value is out
// of range for `T`.
fn parse_field<T: FromStr>(text: &str) -> Result<T> {
    text.parse().map_err(|_| FractionError::overflow("parse"))
}

impl<T: Integral> FromStr for Ratio<T> {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self> {
        let (numer_text, denom_text) = match s.split_once('/') {
            Some((numer, denom)) => (numer, Some(denom)),
            None => (s, None),
        };

        if !is_numerator(numer_text) || !denom_text.map_or(true, is_digits) {
            return Err(FractionError::invalid_format(s));
        }

        let numer = parse_field(numer_text)?;
        let denom = match denom_text {
            Some(text) => parse_field(text)?,
            None => T::one(),
        };

        Self::normalize("parse", numer, denom)
    }
}
