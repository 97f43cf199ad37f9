//! Operator overloads.
//!
//! The operators behave like the built-in integer operators: they panic on
//! overflow and on division by zero. Use the `try_*` methods on
//! [`Ratio`] to handle those cases as errors.

use fractions_integers::{Integer, Integral};
use num_traits::{One, Zero};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::Result;
use crate::Ratio;

fn unwrap_op<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $checked:ident, $checked_int:ident) => {
        impl<T: Integral> $imp for Ratio<T> {
            type Output = Ratio<T>;

            fn $method(self, rhs: Ratio<T>) -> Ratio<T> {
                unwrap_op(self.$checked(&rhs))
            }
        }

        impl<T: Integral> $imp<&Ratio<T>> for Ratio<T> {
            type Output = Ratio<T>;

            fn $method(self, rhs: &Ratio<T>) -> Ratio<T> {
                unwrap_op(self.$checked(rhs))
            }
        }

        impl<T: Integral> $imp<Ratio<T>> for &Ratio<T> {
            type Output = Ratio<T>;

            fn $method(self, rhs: Ratio<T>) -> Ratio<T> {
                unwrap_op(self.$checked(&rhs))
            }
        }

        impl<T: Integral> $imp<&Ratio<T>> for &Ratio<T> {
            type Output = Ratio<T>;

            fn $method(self, rhs: &Ratio<T>) -> Ratio<T> {
                unwrap_op(self.$checked(rhs))
            }
        }

        impl<T: Integral> $imp<T> for Ratio<T> {
            type Output = Ratio<T>;

            fn $method(self, rhs: T) -> Ratio<T> {
                unwrap_op(self.$checked_int(&rhs))
            }
        }
    };
}

macro_rules! forward_assign_op {
    ($imp:ident, $method:ident, $checked:ident, $checked_int:ident) => {
        impl<T: Integral> $imp for Ratio<T> {
            fn $method(&mut self, rhs: Ratio<T>) {
                *self = unwrap_op(self.$checked(&rhs));
            }
        }

        impl<T: Integral> $imp<&Ratio<T>> for Ratio<T> {
            fn $method(&mut self, rhs: &Ratio<T>) {
                *self = unwrap_op(self.$checked(rhs));
            }
        }

        impl<T: Integral> $imp<T> for Ratio<T> {
            fn $method(&mut self, rhs: T) {
                *self = unwrap_op(self.$checked_int(&rhs));
            }
        }
    };
}

// `T op Ratio<T>` cannot be written generically for foreign `T`, so each
// field type gets its own impls.
macro_rules! forward_integer_lhs_binop {
    ($int:ty; $($imp:ident, $method:ident, $checked:ident);+ $(;)?) => {
        $(
            impl $imp<Ratio<$int>> for $int {
                type Output = Ratio<$int>;

                fn $method(self, rhs: Ratio<$int>) -> Ratio<$int> {
                    unwrap_op(Ratio::from_integer(self).and_then(|lhs| lhs.$checked(&rhs)))
                }
            }

            impl $imp<&Ratio<$int>> for $int {
                type Output = Ratio<$int>;

                fn $method(self, rhs: &Ratio<$int>) -> Ratio<$int> {
                    unwrap_op(Ratio::from_integer(self).and_then(|lhs| lhs.$checked(rhs)))
                }
            }
        )+
    };
}

forward_binop!(Add, add, try_add, try_add_integer);
forward_binop!(Sub, sub, try_sub, try_sub_integer);
forward_binop!(Mul, mul, try_mul, try_mul_integer);
forward_binop!(Div, div, try_div, try_div_integer);

forward_integer_lhs_binop!(i64; Add, add, try_add; Sub, sub, try_sub; Mul, mul, try_mul; Div, div, try_div);
forward_integer_lhs_binop!(Integer; Add, add, try_add; Sub, sub, try_sub; Mul, mul, try_mul; Div, div, try_div);

forward_assign_op!(AddAssign, add_assign, try_add, try_add_integer);
forward_assign_op!(SubAssign, sub_assign, try_sub, try_sub_integer);
forward_assign_op!(MulAssign, mul_assign, try_mul, try_mul_integer);
forward_assign_op!(DivAssign, div_assign, try_div, try_div_integer);

impl<T: Integral> Neg for Ratio<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let (numer, denom) = self.into_parts();
        Ratio::from_reduced(-numer, denom)
    }
}

impl<T: Integral> Neg for &Ratio<T> {
    type Output = Ratio<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<T: Integral> Zero for Ratio<T> {
    fn zero() -> Self {
        Ratio::from_reduced(T::zero(), T::one())
    }

    fn is_zero(&self) -> bool {
        Ratio::is_zero(self)
    }
}

impl<T: Integral> One for Ratio<T> {
    fn one() -> Self {
        Ratio::from_reduced(T::one(), T::one())
    }

    fn is_one(&self) -> bool {
        Ratio::is_one(self)
    }
}

impl<T: Integral> Sum for Ratio<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a, T: Integral> Sum<&'a Ratio<T>> for Ratio<T> {
    fn sum<I: Iterator<Item = &'a Ratio<T>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<T: Integral> Product for Ratio<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a, T: Integral> Product<&'a Ratio<T>> for Ratio<T> {
    fn product<I: Iterator<Item = &'a Ratio<T>>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}
