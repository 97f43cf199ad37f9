//! Text output.
//!
//! The canonical form is `numer/denom`, or just `numer` for integers. A
//! precision in the format string switches to fixed-point decimal output,
//! so `format!("{:.3}", x)` prints `x` rounded to three places.

use fractions_integers::Integral;
use std::fmt;

use crate::Ratio;

// Width, fill, alignment and `+` are applied the way integers apply them.
impl<T: Integral> fmt::Display for Ratio<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            let value = self.to_f64();
            let digits = format!("{:.*}", precision, value.abs());
            return f.pad_integral(!value.is_sign_negative(), "", &digits);
        }

        let magnitude = if self.is_integer() {
            self.numer().abs().to_string()
        } else {
            format!("{}/{}", self.numer().abs(), self.denom())
        };

        f.pad_integral(!self.is_negative(), "", &magnitude)
    }
}

impl<T: Integral> fmt::Debug for Ratio<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ratio({}/{})", self.numer(), self.denom())
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigFraction, Fraction};

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(1, 4).to_string(), "1/4");
        assert_eq!(frac(-1, -4).to_string(), "1/4");
        assert_eq!(frac(1, -4).to_string(), "-1/4");
        assert_eq!(frac(6, 3).to_string(), "2");
        assert_eq!(frac(0, -3).to_string(), "0");
    }

    #[test]
    fn test_display_with_precision() {
        assert_eq!(format!("{:.3}", frac(1, 3)), "0.333");
        assert_eq!(format!("{:.2}", frac(-2, 3)), "-0.67");
        assert_eq!(format!("{:.0}", frac(11, 3)), "4");
    }

    #[test]
    fn test_display_honors_width_and_alignment() {
        assert_eq!(format!("{:>8}", frac(1, 2)), "     1/2");
        assert_eq!(format!("{:<6}|", frac(-1, 2)), "-1/2  |");
        assert_eq!(format!("{:^7}", frac(3, 1)), "   3   ");
        assert_eq!(format!("{:*>6}", frac(-5, 3)), "**-5/3");
        assert_eq!(format!("{:+}", frac(1, 2)), "+1/2");
        assert_eq!(format!("{:06}", frac(-1, 2)), "-001/2");
        assert_eq!(format!("{:>7.2}", frac(-2, 3)), "  -0.67");
        assert_eq!(format!("{:+.1}", frac(1, 3)), "+0.3");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", frac(3, 1)), "Ratio(3/1)");
        assert_eq!(format!("{:?}", BigFraction::from(-2)), "Ratio(-2/1)");
    }
}
