//! Property-based tests for fraction arithmetic.

#[cfg(test)]
mod tests {
    use fractions_integers::{Integer, Integral};
    use proptest::prelude::*;

    use crate::{BigFraction, Fraction};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Strategy covering the whole representable i64 range
    fn any_in_range() -> impl Strategy<Value = i64> {
        (i64::MIN + 1)..=i64::MAX
    }

    fn any_non_zero() -> impl Strategy<Value = i64> {
        any_in_range().prop_filter("non-zero", |n| *n != 0)
    }

    fn small_frac() -> impl Strategy<Value = Fraction> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    fn wide_frac() -> impl Strategy<Value = Fraction> {
        (any_in_range(), any_non_zero()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    fn fits_i64(n: &Integer) -> bool {
        n.to_i64().is_some_and(|n| n.in_range())
    }

    fn fits(f: &BigFraction) -> bool {
        fits_i64(f.numer()) && fits_i64(f.denom())
    }

    proptest! {
        // Normalization

        #[test]
        fn construction_is_normalized(n in any_in_range(), d in any_non_zero()) {
            let f = Fraction::new(n, d).unwrap();

            prop_assert!(*f.denom() > 0);
            prop_assert_eq!(Integral::gcd(f.numer(), f.denom()), 1);
        }

        #[test]
        fn normalization_is_idempotent(f in wide_frac()) {
            let (n, d) = f.into_parts();
            prop_assert_eq!(Fraction::new(n, d), Ok(f));
        }

        #[test]
        fn scaled_representations_are_equal(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            prop_assert_eq!(Fraction::new(n * k, d * k), Fraction::new(n, d));
        }

        // Field axioms on values that cannot overflow

        #[test]
        fn add_commutative(a in small_frac(), b in small_frac()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn add_associative(a in small_frac(), b in small_frac(), c in small_frac()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn mul_commutative(a in small_frac(), b in small_frac()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn mul_associative(a in small_frac(), b in small_frac(), c in small_frac()) {
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn distributive(a in small_frac(), b in small_frac(), c in small_frac()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn sub_is_add_neg(a in small_frac(), b in small_frac()) {
            prop_assert_eq!(a - b, a + (-b));
        }

        #[test]
        fn div_then_mul_roundtrip(a in small_frac(), b in small_frac()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!((a / b) * b, a);
        }

        #[test]
        fn recip_is_involution(a in wide_frac()) {
            prop_assume!(!a.is_zero());
            prop_assert_eq!(a.recip().unwrap().recip(), Ok(a));
        }

        // Checked arithmetic agrees with arbitrary precision

        #[test]
        fn checked_add_fails_only_when_out_of_range(a in wide_frac(), b in wide_frac()) {
            let big = BigFraction::from(a) + BigFraction::from(b);

            match a.try_add(&b) {
                Ok(sum) => prop_assert_eq!(BigFraction::from(sum), big),
                Err(_) => prop_assert!(!fits(&big)),
            }
        }

        #[test]
        fn checked_sub_fails_only_when_out_of_range(a in wide_frac(), b in wide_frac()) {
            let big = BigFraction::from(a) - BigFraction::from(b);

            match a.try_sub(&b) {
                Ok(diff) => prop_assert_eq!(BigFraction::from(diff), big),
                Err(_) => prop_assert!(!fits(&big)),
            }
        }

        #[test]
        fn checked_add_of_shared_denominators(n in any_in_range(), m in any_in_range(), k in 1i64..=1 << 20, j in 1i64..=1 << 20) {
            let common = i64::MAX / (1 << 20);
            let a = Fraction::new(n, common * k).unwrap();
            let b = Fraction::new(m, common * j).unwrap();
            let big = BigFraction::from(a) + BigFraction::from(b);

            match a.try_add(&b) {
                Ok(sum) => prop_assert_eq!(BigFraction::from(sum), big),
                Err(_) => prop_assert!(!fits(&big)),
            }
        }

        #[test]
        fn checked_mul_fails_only_when_out_of_range(a in wide_frac(), b in wide_frac()) {
            let big = BigFraction::from(a) * BigFraction::from(b);

            match a.try_mul(&b) {
                Ok(product) => prop_assert_eq!(BigFraction::from(product), big),
                Err(_) => prop_assert!(!fits(&big)),
            }
        }

        // Ordering

        #[test]
        fn ordering_matches_big(a in wide_frac(), b in wide_frac()) {
            prop_assert_eq!(a.cmp(&b), BigFraction::from(a).cmp(&BigFraction::from(b)));
        }

        #[test]
        fn floor_ceil_bracket(a in wide_frac()) {
            let floor = Fraction::from_integer(a.floor()).unwrap();
            let ceil = Fraction::from_integer(a.ceil()).unwrap();

            prop_assert!(floor <= a);
            prop_assert!(a <= ceil);
        }

        // Text form

        #[test]
        fn display_parse_roundtrip(a in wide_frac()) {
            prop_assert_eq!(a.to_string().parse::<Fraction>(), Ok(a));
        }
    }
}
