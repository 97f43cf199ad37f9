//! Floating point conversions.

use fractions_integers::Integral;
use serde::{Deserialize, Serialize};

use crate::error::{FractionError, Result};
use crate::Ratio;

/// Configuration for converting floats into fractions.
///
/// A float is rounded to a fixed number of decimal places and the result
/// reduced, so with the default of four places `0.333333` becomes
/// `3333/10000` and `0.5` becomes `1/2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatConversion {
    decimal_places: u32,
}

impl FloatConversion {
    /// Decimal places kept when no configuration is given.
    pub const DEFAULT_DECIMAL_PLACES: u32 = 4;

    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            decimal_places: Self::DEFAULT_DECIMAL_PLACES,
        }
    }

    /// Sets the number of decimal places kept.
    #[must_use]
    pub const fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Returns the number of decimal places kept.
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }
}

impl Default for FloatConversion {
    fn default() -> Self {
        Self::new()
    }
}

// Largest power of ten an f64 holds exactly.
const MAX_EXACT_POWER: i32 = 22;

impl<T: Integral> Ratio<T> {
    /// Converts a float using the default [`FloatConversion`].
    ///
    /// # Errors
    ///
    /// See [`Ratio::from_f64_with`].
    pub fn from_f64(value: f64) -> Result<Self> {
        Self::from_f64_with(value, &FloatConversion::default())
    }

    /// Converts a float, rounding it to `config.decimal_places()` places.
    ///
    /// The denominator before reduction is exactly `10^places`.
    ///
    /// # Errors
    ///
    /// Returns `NotFinite` for NaN and infinities, and `Overflow` if the
    /// scaled value does not fit `T`.
    pub fn from_f64_with(value: f64, config: &FloatConversion) -> Result<Self> {
        if !value.is_finite() {
            return Err(FractionError::not_finite(value));
        }

        let overflow = || FractionError::overflow("from_f64");

        let places = i32::try_from(config.decimal_places()).map_err(|_| overflow())?;
        let (denom, _) = Self::from_integer(T::from_i32(10))?
            .pow(places)
            .map_err(|_| overflow())?
            .into_parts();

        let numer = if places <= MAX_EXACT_POWER {
            // 10^places is exact in f64, so only the product is rounded
            T::from_f64((value * 10f64.powi(places)).round()).ok_or_else(overflow)?
        } else {
            Self::exact_f64(value)?
                .try_mul_integer(&denom)
                .map_err(|_| overflow())?
                .round_half_away()?
        };

        Self::normalize("from_f64", numer, denom)
    }

    /// The exact value of a finite float.
    fn exact_f64(value: f64) -> Result<Self> {
        let overflow = || FractionError::overflow("from_f64");

        if value.fract() == 0.0 {
            return Self::from_integer(T::from_f64(value).ok_or_else(overflow)?);
        }

        // value = mantissa * 2^exponent with a negative exponent
        let bits = value.abs().to_bits();
        let biased = i32::try_from(bits >> 52).map_err(|_| overflow())?;
        let (mantissa, exponent) = if biased == 0 {
            (bits, -1074)
        } else {
            ((bits & ((1u64 << 52) - 1)) | (1u64 << 52), biased - 1075)
        };

        #[allow(clippy::cast_precision_loss)]
        let mantissa = T::from_f64(mantissa as f64).ok_or_else(overflow)?;
        let mantissa = if value < 0.0 { -mantissa } else { mantissa };
        let (scale, _) = Self::from_integer(T::from_i32(2))?
            .pow(-exponent)
            .map_err(|_| overflow())?
            .into_parts();

        Self::new(mantissa, scale)
    }

    /// Nearest integer, halves rounded away from zero.
    fn round_half_away(&self) -> Result<T> {
        let whole = self.trunc();
        let doubled = self.fract().abs().try_mul_integer(&T::from_i32(2))?;

        if doubled < T::one() {
            Ok(whole)
        } else if self.is_negative() {
            Ok(whole - T::one())
        } else {
            Ok(whole + T::one())
        }
    }

    /// Nearest `f64`. Lossy; fields beyond the `f64` range are scaled down
    /// first, so only a quotient beyond the range saturates.
    pub fn to_f64(&self) -> f64 {
        T::ratio_to_f64(self.numer(), self.denom())
    }

    /// Nearest `f32`. Lossy.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// The value rounded half away from zero to `precision` decimal places.
    ///
    /// Never fails: when the scaled value leaves the `f64` range the plain
    /// `to_f64` approximation is returned.
    pub fn to_decimal(&self, precision: u32) -> f64 {
        let value = self.to_f64();
        let scale = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
        let rounded = (value * scale).round() / scale;

        if rounded.is_finite() {
            rounded
        } else {
            value
        }
    }
}

impl<T: Integral> TryFrom<f64> for Ratio<T> {
    type Error = FractionError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}
