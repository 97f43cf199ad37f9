//! The integer abstraction underlying every fraction.
//!
//! A fraction engine needs surprisingly little from its integers: sign
//! tests, checked products, cancelled cross sums, truncating division, a
//! GCD and a way to compare cross products. Everything here is implemented
//! for the machine word (`i64`) and for [`Integer`].

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Neg, Sub};
use std::str::FromStr;

use crate::Integer;

/// An integer type usable as numerator and denominator.
///
/// # Range
///
/// Implementors may restrict the values a fraction can hold through
/// [`Integral::in_range`]. Within that range `neg` and `abs` never
/// overflow, and every checked operation reports results outside it as
/// `None`.
pub trait Integral:
    Clone + Eq + Ord + Hash + Debug + Display + FromStr + Zero + One + Sub<Output = Self> + Neg<Output = Self>
{
    /// Returns true if this value may be stored in a fraction.
    fn in_range(&self) -> bool;

    /// Returns true if this value is below zero.
    fn is_negative(&self) -> bool;

    /// Multiplication, or `None` if the result leaves the range.
    fn checked_mul(&self, rhs: &Self) -> Option<Self>;

    /// Computes `t = a*b + c*d` (or `a*b - c*d` when `subtract` is set) and
    /// cancels the common factor `g2 = gcd(t, g)`, returning `(t / g2, g2)`.
    ///
    /// `t` itself may leave the range; `None` is returned only when `t / g2`
    /// does. `g` must be positive.
    fn checked_cross_sum(a: &Self, b: &Self, c: &Self, d: &Self, subtract: bool, g: &Self) -> Option<(Self, Self)>;

    /// Division rounding toward zero. `rhs` must not be zero.
    fn div_trunc(&self, rhs: &Self) -> Self;

    /// Remainder of [`Integral::div_trunc`], carrying the sign of `self`.
    fn rem_trunc(&self, rhs: &Self) -> Self;

    /// Compares `a * b` with `c * d` exactly, without overflow.
    fn cmp_products(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering;

    /// Nearest `f64`; saturates to infinity.
    fn to_f64(&self) -> f64;

    /// Nearest `f64` to `numer / denom`. `denom` must not be zero.
    ///
    /// Fields beyond the `f64` range do not turn the quotient into NaN.
    fn ratio_to_f64(numer: &Self, denom: &Self) -> f64 {
        numer.to_f64() / denom.to_f64()
    }

    /// Exact conversion of an integral `f64`, `None` if out of range.
    fn from_f64(value: f64) -> Option<Self>;

    /// Lossless conversion from a 32-bit integer.
    fn from_i32(value: i32) -> Self;

    /// Absolute value.
    #[must_use]
    fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Greatest common divisor of the magnitudes, by Euclid's algorithm.
    ///
    /// `gcd(0, 0)` is zero; otherwise the result is positive.
    #[must_use]
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();

        while !b.is_zero() {
            let r = a.rem_trunc(&b);
            a = b;
            b = r;
        }

        a
    }
}

impl Integral for i64 {
    /// `i64::MIN` is excluded so that negation is total.
    fn in_range(&self) -> bool {
        *self != i64::MIN
    }

    fn is_negative(&self) -> bool {
        *self < 0
    }

    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        i64::checked_mul(*self, *rhs).filter(|value| value.in_range())
    }

    fn checked_cross_sum(a: &Self, b: &Self, c: &Self, d: &Self, subtract: bool, g: &Self) -> Option<(Self, Self)> {
        // each product is below 2^126 in magnitude, so the sum fits an i128
        let lhs = i128::from(*a) * i128::from(*b);
        let rhs = i128::from(*c) * i128::from(*d);
        let t = if subtract { lhs - rhs } else { lhs + rhs };

        let mut x = t.unsigned_abs();
        let mut y = u128::from(g.unsigned_abs());
        while y != 0 {
            (x, y) = (y, x % y);
        }

        let g2 = i128::try_from(x).ok()?;
        let quotient = i64::try_from(t / g2).ok().filter(|value| value.in_range())?;
        Some((quotient, i64::try_from(g2).ok()?))
    }

    fn div_trunc(&self, rhs: &Self) -> Self {
        self / rhs
    }

    fn rem_trunc(&self, rhs: &Self) -> Self {
        self % rhs
    }

    fn cmp_products(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering {
        // |i64| * |i64| < 2^126, so the products are exact in i128
        (i128::from(*a) * i128::from(*b)).cmp(&(i128::from(*c) * i128::from(*d)))
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_f64(&self) -> f64 {
        *self as f64
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Option<Self> {
        // 2^63 is exactly representable; the open interval excludes i64::MIN
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;

        if value.is_finite() && value.fract() == 0.0 && value > -LIMIT && value < LIMIT {
            Some(value as i64)
        } else {
            None
        }
    }

    fn from_i32(value: i32) -> Self {
        i64::from(value)
    }
}

impl Integral for Integer {
    fn in_range(&self) -> bool {
        true
    }

    fn is_negative(&self) -> bool {
        Integer::is_negative(self)
    }

    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Some(self * rhs)
    }

    fn checked_cross_sum(a: &Self, b: &Self, c: &Self, d: &Self, subtract: bool, g: &Self) -> Option<(Self, Self)> {
        let lhs = a * b;
        let rhs = c * d;
        let t = if subtract { &lhs - &rhs } else { &lhs + &rhs };
        let g2 = t.gcd(g);

        Some((&t / &g2, g2))
    }

    fn div_trunc(&self, rhs: &Self) -> Self {
        self / rhs
    }

    fn rem_trunc(&self, rhs: &Self) -> Self {
        self % rhs
    }

    fn cmp_products(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering {
        (a * b).cmp(&(c * d))
    }

    fn to_f64(&self) -> f64 {
        Integer::to_f64(self)
    }

    fn ratio_to_f64(numer: &Self, denom: &Self) -> f64 {
        numer.ratio_to_f64(denom)
    }

    fn from_f64(value: f64) -> Option<Self> {
        Integer::from_f64(value)
    }

    fn from_i32(value: i32) -> Self {
        Integer::from(value)
    }

    fn abs(&self) -> Self {
        Integer::abs(self)
    }

    fn gcd(&self, other: &Self) -> Self {
        Integer::gcd(self, other)
    }
}
