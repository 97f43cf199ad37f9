//! Serde support.
//!
//! Fractions serialize as `{"numerator": n, "denominator": d}`. Reading is
//! more lenient: besides that object a bare integer, a bare float (under
//! the default [`FloatConversion`](crate::FloatConversion)) or a string in
//! the textual form is accepted. Every input is validated and normalized
//! exactly as the constructors do.

use fractions_integers::Integral;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Ratio;

#[derive(Serialize)]
struct Parts<'a, T> {
    numerator: &'a T,
    denominator: &'a T,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr<T> {
    Parts { numerator: T, denominator: T },
    Whole(T),
    Float(f64),
    Text(String),
}

impl<T: Integral + Serialize> Serialize for Ratio<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Parts {
            numerator: self.numer(),
            denominator: self.denom(),
        }
        .serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Ratio<T>
where
    T: Integral + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ratio = match Repr::<T>::deserialize(deserializer)? {
            Repr::Parts {
                numerator,
                denominator,
            } => Ratio::new(numerator, denominator),
            Repr::Whole(n) => Ratio::from_integer(n),
            Repr::Float(value) => Ratio::from_f64(value),
            Repr::Text(text) => text.parse(),
        };

        ratio.map_err(D::Error::custom)
    }
}
