//! Ordering by cross-multiplication.
//!
//! Denominators are positive, so `a/b < c/d` exactly when `a*d < c*b`.
//! Equality needs no arithmetic at all: normalized fractions are equal
//! only when their fields are.

use fractions_integers::Integral;
use std::cmp::Ordering;

use crate::Ratio;

impl<T: Integral> Ord for Ratio<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        T::cmp_products(self.numer(), other.denom(), other.numer(), self.denom())
    }
}

impl<T: Integral> PartialOrd for Ratio<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Integral> PartialEq<T> for Ratio<T> {
    fn eq(&self, other: &T) -> bool {
        self.is_integer() && self.numer() == other
    }
}

impl<T: Integral> PartialOrd<T> for Ratio<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(T::cmp_products(self.numer(), &T::one(), other, self.denom()))
    }
}
