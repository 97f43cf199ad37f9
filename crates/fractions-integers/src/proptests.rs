//! Property-based tests for the integer layer.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::{Integer, Integral};

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

    proptest! {
        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let g = Integral::gcd(&a, &b);

            prop_assert!(g > 0);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }

        #[test]
        fn gcd_commutative(a in small_int(), b in small_int()) {
            prop_assert_eq!(Integral::gcd(&a, &b), Integral::gcd(&b, &a));
        }

        #[test]
        fn gcd_machine_matches_big(a in any_in_range(), b in any_in_range()) {
            let small = Integral::gcd(&a, &b);
            let big = Integral::gcd(&Integer::new(a), &Integer::new(b));
            prop_assert_eq!(Integer::new(small), big);
        }

        #[test]
        fn gcd_of_coprime_quotients_is_one(a in non_zero_int(), b in non_zero_int()) {
            let g = Integral::gcd(&a, &b);
            prop_assert_eq!(Integral::gcd(&(a / g), &(b / g)), 1);
        }

        // Checked arithmetic agrees with arbitrary precision

        #[test]
        fn checked_mul_matches_big(a in any_in_range(), b in any_in_range()) {
            let big = Integer::new(a) * Integer::new(b);
            match Integral::checked_mul(&a, &b) {
                Some(product) => prop_assert_eq!(Integer::new(product), big),
                None => prop_assert!(big.to_i64().map_or(true, |v| v == i64::MIN)),
            }
        }

        #[test]
        fn cross_sum_matches_big(
            a in any_in_range(),
            b in any_in_range(),
            c in any_in_range(),
            d in any_in_range(),
            subtract in any::<bool>(),
            g in 1i64..=i64::MAX
        ) {
            let (big_a, big_b, big_c, big_d) = (Integer::new(a), Integer::new(b), Integer::new(c), Integer::new(d));
            let big_g = Integer::new(g);
            let (quotient, factor) =
                Integer::checked_cross_sum(&big_a, &big_b, &big_c, &big_d, subtract, &big_g).unwrap();

            match i64::checked_cross_sum(&a, &b, &c, &d, subtract, &g) {
                Some((small_quotient, small_factor)) => {
                    prop_assert_eq!(Integer::new(small_quotient), quotient);
                    prop_assert_eq!(Integer::new(small_factor), factor);
                }
                None => prop_assert!(quotient.to_i64().map_or(true, |v| v == i64::MIN)),
            }
        }

        #[test]
        fn cmp_products_matches_big(
            a in any_in_range(),
            b in any_in_range(),
            c in any_in_range(),
            d in any_in_range()
        ) {
            let expected = Integer::cmp_products(
                &Integer::new(a),
                &Integer::new(b),
                &Integer::new(c),
                &Integer::new(d),
            );
            prop_assert_eq!(i64::cmp_products(&a, &b, &c, &d), expected);
        }

        #[test]
        fn cmp_products_reflexive(a in small_int(), b in small_int()) {
            prop_assert_eq!(i64::cmp_products(&a, &b, &b, &a), Ordering::Equal);
        }

        #[test]
        fn truncating_division_identity(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = a.div_trunc(&b);
            let r = a.rem_trunc(&b);
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }
    }
}
