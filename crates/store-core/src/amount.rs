//! # Amount
//!
//! Numeric JSON value used for product prices and payment amounts.
//!
//! Amounts are carried as `f64` and rendered in their shortest form: a value
//! with no fractional part is written as an integer, so `100.00` on the way in
//! comes back out as `100`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Integral values below this magnitude are written out in full
const INTEGER_LIMIT: f64 = 1e21;

/// A numeric amount (price or payment amount)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The value as an integer when it is integral and below 1e21 in magnitude
    fn as_integer(&self) -> Option<i128> {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 && v.abs() < INTEGER_LIMIT {
            Some(v as i128)
        } else {
            None
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_integer() {
            Some(i) => write!(f, "{}", i),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(i) => serializer.serialize_i128(i),
            None => serializer.serialize_f64(self.0),
        }
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON number")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Ok(Amount(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Ok(Amount(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Ok(Amount(v as f64))
    }

    // null leaves the amount at zero
    fn visit_unit<E: de::Error>(self) -> Result<Amount, E> {
        Ok(Amount::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Amount, E> {
        Ok(Amount::ZERO)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(raw: &str) -> String {
        let amount: Amount = serde_json::from_str(raw).unwrap();
        serde_json::to_string(&amount).unwrap()
    }

    #[test]
    fn test_integral_values_drop_trailing_zeros() {
        assert_eq!(render("100.00"), "100");
        assert_eq!(render("10.0"), "10");
        assert_eq!(render("1e2"), "100");
        assert_eq!(render("42"), "42");
    }

    #[test]
    fn test_fractional_values_keep_precision() {
        assert_eq!(render("12.50"), "12.5");
        assert_eq!(render("0.1"), "0.1");
        assert_eq!(render("-3.75"), "-3.75");
    }

    #[test]
    fn test_range_is_not_validated() {
        assert_eq!(render("-100"), "-100");
        assert_eq!(render("0"), "0");
    }

    #[test]
    fn test_null_is_zero() {
        let amount: Amount = serde_json::from_str("null").unwrap();
        assert_eq!(amount, Amount::ZERO);
    }

    #[test]
    fn test_non_numbers_are_rejected() {
        assert!(serde_json::from_str::<Amount>("\"100\"").is_err());
        assert!(serde_json::from_str::<Amount>("true").is_err());
        assert!(serde_json::from_str::<Amount>("[1]").is_err());
        assert!(serde_json::from_str::<Amount>("{}").is_err());
    }

    #[test]
    fn test_large_integers_written_in_full() {
        assert_eq!(render("1e20"), "100000000000000000000");
        assert_eq!(render("-9.3e18"), "-9300000000000000000");
        assert_eq!(Amount::new(1e20).to_string(), "100000000000000000000");
    }

    #[test]
    fn test_exponent_form_beyond_integer_limit() {
        let rendered = render("1e21");
        assert!(rendered.contains('e'), "got {}", rendered);
        assert_eq!(serde_json::from_str::<f64>(&rendered).unwrap(), 1e21);
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(20.0).to_string(), "20");
        assert_eq!(Amount::new(19.99).to_string(), "19.99");
    }
}
