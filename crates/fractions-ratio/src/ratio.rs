//! Normalized fractions over an [`Integral`] field type.
//!
//! Every `Ratio` leaving this module is in lowest terms with a positive
//! denominator, so structural equality is numerical equality and zero is
//! always `0/1`.

use fractions_integers::{Integer, Integral};

use crate::error::{FractionError, Result};

/// An exact fraction `numer / denom`.
///
/// Values are immutable and always normalized: `gcd(|numer|, denom) == 1`
/// and `denom > 0`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

/// A fraction of machine words. Results that do not fit an `i64` are
/// reported as [`FractionError::Overflow`].
pub type Fraction = Ratio<i64>;

/// An arbitrary precision fraction. Arithmetic never overflows.
pub type BigFraction = Ratio<Integer>;

impl<T: Integral> Ratio<T> {
    /// Creates a fraction in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `denom` is zero and `Overflow` if either
    /// field is outside the range of `T`.
    pub fn new(numer: T, denom: T) -> Result<Self> {
        Self::normalize("new", numer, denom)
    }

    /// Creates the fraction `n/1`.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if `n` is outside the range of `T`.
    pub fn from_integer(n: T) -> Result<Self> {
        if !n.in_range() {
            return Err(FractionError::overflow("from_integer"));
        }

        Ok(Self {
            numer: n,
            denom: T::one(),
        })
    }

    /// Creates the mixed number `wholes + numer/denom`.
    ///
    /// # Errors
    ///
    /// As [`Ratio::new`], plus `Overflow` if the sum does not fit.
    pub fn from_mixed(wholes: T, numer: T, denom: T) -> Result<Self> {
        let part = Self::new(numer, denom)?;
        Self::from_integer(wholes)?.add_with(&part, "from_mixed")
    }

    /// Reduces `numer/denom` and moves the sign to the numerator.
    pub(crate) fn normalize(op: &'static str, numer: T, denom: T) -> Result<Self> {
        if denom.is_zero() {
            return Err(FractionError::division_by_zero(op));
        }

        if !numer.in_range() || !denom.in_range() {
            return Err(FractionError::overflow(op));
        }

        let g = numer.gcd(&denom);
        let mut numer = numer.div_trunc(&g);
        let mut denom = denom.div_trunc(&g);

        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        Ok(Self { numer, denom })
    }

    /// Wraps fields the caller already knows to be normalized.
    pub(crate) fn from_reduced(numer: T, denom: T) -> Self {
        debug_assert!(!denom.is_negative() && !denom.is_zero());
        Self { numer, denom }
    }

    /// Returns the numerator. Carries the sign of the fraction.
    pub fn numer(&self) -> &T {
        &self.numer
    }

    /// Returns the denominator. Always positive.
    pub fn denom(&self) -> &T {
        &self.denom
    }

    /// Consumes the fraction, returning `(numer, denom)`.
    pub fn into_parts(self) -> (T, T) {
        (self.numer, self.denom)
    }

    /// Returns true for `0/1`.
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Returns true for `1/1`.
    pub fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }

    /// Returns true if the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Returns true if the fraction is below zero.
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// Returns true if the fraction is above zero.
    pub fn is_positive(&self) -> bool {
        !self.numer.is_zero() && !self.numer.is_negative()
    }

    /// Returns the sign: -1, 0, or 1.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if the fraction is zero.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(FractionError::division_by_zero("recip"));
        }

        // already coprime; only the sign moves
        Ok(if self.is_negative() {
            Self::from_reduced(-self.denom.clone(), -self.numer.clone())
        } else {
            Self::from_reduced(self.denom.clone(), self.numer.clone())
        })
    }

    /// Computes `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the result does not fit `T`.
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.add_with(rhs, "add")
    }

    /// Computes `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the result does not fit `T`.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.combine(rhs, "sub", true)
    }

    /// Computes `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the result does not fit `T`.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        self.mul_with(rhs, "mul")
    }

    /// Computes `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `rhs` is zero and `Overflow` if the
    /// result does not fit `T`.
    pub fn try_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(FractionError::division_by_zero("div"));
        }

        self.mul_with(&rhs.recip()?, "div")
    }

    /// Computes `self + n`.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if `n` or the result does not fit `T`.
    pub fn try_add_integer(&self, n: &T) -> Result<Self> {
        self.try_add(&Self::from_integer(n.clone())?)
    }

    /// Computes `self - n`.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if `n` or the result does not fit `T`.
    pub fn try_sub_integer(&self, n: &T) -> Result<Self> {
        self.try_sub(&Self::from_integer(n.clone())?)
    }

    /// Computes `self * n`.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if `n` or the result does not fit `T`.
    pub fn try_mul_integer(&self, n: &T) -> Result<Self> {
        self.try_mul(&Self::from_integer(n.clone())?)
    }

    /// Computes `self / n`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `n` is zero and `Overflow` if `n` or the
    /// result does not fit `T`.
    pub fn try_div_integer(&self, n: &T) -> Result<Self> {
        self.try_div(&Self::from_integer(n.clone())?)
    }

    /// Raises the fraction to an integer power by repeated squaring.
    ///
    /// `x^0` is one for every `x`, zero included. A negative exponent
    /// raises the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for zero raised to a negative power and
    /// `Overflow` if the result does not fit `T`.
    pub fn pow(&self, exp: i32) -> Result<Self> {
        let base = if exp < 0 { self.recip()? } else { self.clone() };
        let overflow = move || FractionError::overflow("pow");

        let (mut base_numer, mut base_denom) = base.into_parts();
        let mut numer = T::one();
        let mut denom = T::one();
        let mut remaining = exp.unsigned_abs();

        while remaining > 0 {
            if remaining & 1 == 1 {
                numer = numer.checked_mul(&base_numer).ok_or_else(overflow)?;
                denom = denom.checked_mul(&base_denom).ok_or_else(overflow)?;
            }

            remaining >>= 1;

            if remaining > 0 {
                base_numer = base_numer.checked_mul(&base_numer).ok_or_else(overflow)?;
                base_denom = base_denom.checked_mul(&base_denom).ok_or_else(overflow)?;
            }
        }

        Self::normalize("pow", numer, denom)
    }

    /// Integral part, rounding toward zero.
    pub fn trunc(&self) -> T {
        self.numer.div_trunc(&self.denom)
    }

    /// Largest integer not above the fraction.
    pub fn floor(&self) -> T {
        let whole = self.trunc();

        if self.is_negative() && !self.is_integer() {
            whole - T::one()
        } else {
            whole
        }
    }

    /// Smallest integer not below the fraction.
    pub fn ceil(&self) -> T {
        let whole = self.trunc();

        if self.is_positive() && !self.is_integer() {
            whole + T::one()
        } else {
            whole
        }
    }

    /// Fractional part, `self - self.trunc()`. Has the sign of `self`.
    #[must_use]
    pub fn fract(&self) -> Self {
        // n rem d shares no factor with d, and is zero only when d == 1
        Self {
            numer: self.numer.rem_trunc(&self.denom),
            denom: self.denom.clone(),
        }
    }

    fn add_with(&self, rhs: &Self, op: &'static str) -> Result<Self> {
        self.combine(rhs, op, false)
    }

    // a/b ± c/d with g = gcd(b, d): t = a*(d/g) ± c*(b/g) shares with the
    // denominator only factors of g, so after g2 = gcd(t, g) the result
    // (t/g2) / ((b/g)*(d/g2)) is already in lowest terms.
    fn combine(&self, rhs: &Self, op: &'static str, subtract: bool) -> Result<Self> {
        let overflow = move || FractionError::overflow(op);

        let g = self.denom.gcd(&rhs.denom);
        let lhs_scale = rhs.denom.div_trunc(&g);
        let rhs_scale = self.denom.div_trunc(&g);

        let (numer, g2) = T::checked_cross_sum(&self.numer, &lhs_scale, &rhs.numer, &rhs_scale, subtract, &g)
            .ok_or_else(overflow)?;
        let denom = rhs_scale
            .checked_mul(&rhs.denom.div_trunc(&g2))
            .ok_or_else(overflow)?;

        Self::normalize(op, numer, denom)
    }

    // Cross-cancels before multiplying so that a product representable in
    // lowest terms never overflows on the way there.
    fn mul_with(&self, rhs: &Self, op: &'static str) -> Result<Self> {
        let overflow = move || FractionError::overflow(op);

        let g1 = self.numer.gcd(&rhs.denom);
        let g2 = rhs.numer.gcd(&self.denom);

        let numer = self
            .numer
            .div_trunc(&g1)
            .checked_mul(&rhs.numer.div_trunc(&g2))
            .ok_or_else(overflow)?;
        let denom = self
            .denom
            .div_trunc(&g2)
            .checked_mul(&rhs.denom.div_trunc(&g1))
            .ok_or_else(overflow)?;

        Self::normalize(op, numer, denom)
    }
}

impl<T: Integral> From<i32> for Ratio<T> {
    fn from(n: i32) -> Self {
        Self {
            numer: T::from_i32(n),
            denom: T::one(),
        }
    }
}

impl TryFrom<i64> for Fraction {
    type Error = FractionError;

    fn try_from(n: i64) -> Result<Self> {
        Self::from_integer(n)
    }
}

impl From<i64> for BigFraction {
    fn from(n: i64) -> Self {
        Self::from(Integer::new(n))
    }
}

impl From<Integer> for BigFraction {
    fn from(n: Integer) -> Self {
        Self {
            numer: n,
            denom: Integer::from(1),
        }
    }
}

impl From<Fraction> for BigFraction {
    fn from(value: Fraction) -> Self {
        Self {
            numer: Integer::new(value.numer),
            denom: Integer::new(value.denom),
        }
    }
}
