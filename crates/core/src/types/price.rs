//! Product price in Brazilian reais using decimal arithmetic.

use core::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A price in currency units (reais, not centavos).
///
/// On the wire the price is a plain JSON number. Anything else (a string,
/// `null`, a missing field) decodes as zero rather than failing the whole
/// catalog, and displays as `R$ 0,00`.
///
/// ```
/// use rust_decimal::Decimal;
/// use studio_makeup_core::Price;
///
/// assert_eq!(Price::new(Decimal::new(195, 1)).to_string(), "R$ 19,50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Currency prefix used when displaying prices.
    pub const SYMBOL: &'static str = "R$";

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a float, as produced by JSON or a parsed form.
    ///
    /// Keeps the exact binary value of the float, so `1.005` (stored as
    /// `1.00499...`) rounds down to `1,00` when displayed.
    ///
    /// Returns `None` for NaN, infinite or out-of-range values.
    #[must_use]
    pub fn from_f64(amount: f64) -> Option<Self> {
        Decimal::from_f64_retain(amount).map(Self)
    }

    /// Amount rounded to two decimal places, formatted with a comma
    /// separator and no currency prefix (e.g. `19,50`).
    #[must_use]
    pub fn formatted_amount(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}").replace('.', ",")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Self::SYMBOL, self.formatted_amount())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0.to_f64().unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(f64),
            Other(serde::de::IgnoredAny),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Number(n) => Self::from_f64(n).unwrap_or_default(),
            Wire::Other(_) => Self::default(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals_comma_separator() {
        assert_eq!(Price::from_f64(19.5).unwrap().to_string(), "R$ 19,50");
        assert_eq!(Price::from_f64(7.0).unwrap().to_string(), "R$ 7,00");
        assert_eq!(Price::from_f64(129.9).unwrap().to_string(), "R$ 129,90");
    }

    #[test]
    fn test_display_rounds_to_cents() {
        assert_eq!(Price::new(Decimal::new(19_999, 3)).to_string(), "R$ 20,00");
        assert_eq!(Price::new(Decimal::new(1_234, 3)).to_string(), "R$ 1,23");
    }

    #[test]
    fn test_display_rounds_binary_value_not_literal() {
        assert_eq!(Price::from_f64(1.005).unwrap().to_string(), "R$ 1,00");
        assert_eq!(Price::from_f64(2.675).unwrap().to_string(), "R$ 2,67");
        assert_eq!(Price::from_f64(0.125).unwrap().to_string(), "R$ 0,13");
        assert_eq!(Price::from_f64(39.9).unwrap().to_string(), "R$ 39,90");
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert_eq!(Price::from_f64(f64::NAN), None);
        assert_eq!(Price::from_f64(f64::INFINITY), None);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Price::default().to_string(), "R$ 0,00");
    }

    #[test]
    fn test_deserialize_number() {
        let price: Price = serde_json::from_str("49.9").unwrap();
        assert_eq!(price.formatted_amount(), "49,90");

        let price: Price = serde_json::from_str("35").unwrap();
        assert_eq!(price.formatted_amount(), "35,00");
    }

    #[test]
    fn test_deserialize_non_number_is_zero() {
        let price: Price = serde_json::from_str("\"49.90\"").unwrap();
        assert_eq!(price, Price::default());

        let price: Price = serde_json::from_str("null").unwrap();
        assert_eq!(price, Price::default());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Price::from_f64(19.5).unwrap()).unwrap();
        assert_eq!(json, "19.5");
    }
}
