//! Errors raised by fraction construction, arithmetic and conversion.

use thiserror::Error;
use tracing::debug;

/// Errors that can occur while building or combining fractions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FractionError {
    /// A zero denominator, the reciprocal of zero, or a division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Text that is not a fraction literal.
    #[error("invalid fraction literal {0:?}")]
    InvalidFormat(String),

    /// A value left the range of the underlying integer type.
    #[error("integer overflow in {op}")]
    Overflow {
        /// The operation that overflowed.
        op: &'static str,
    },

    /// A NaN or infinite floating point input.
    #[error("cannot convert a non-finite float to a fraction")]
    NotFinite,
}

/// Result type alias using `FractionError`.
pub type Result<T> = std::result::Result<T, FractionError>;

impl FractionError {
    pub(crate) fn division_by_zero(op: &'static str) -> Self {
        debug!(op, "division by zero");
        Self::DivisionByZero
    }

    pub(crate) fn overflow(op: &'static str) -> Self {
        debug!(op, "integer range exceeded");
        Self::Overflow { op }
    }

    pub(crate) fn invalid_format(input: &str) -> Self {
        debug!(input, "malformed fraction literal");
        Self::InvalidFormat(input.to_owned())
    }

    pub(crate) fn not_finite(value: f64) -> Self {
        debug!(value, "non-finite float conversion");
        Self::NotFinite
    }
}
