//! Product identifiers.
//!
//! The remote catalog may send numeric or string IDs (or none at all), so
//! [`ProductId`] accepts either form on the wire.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric ID, as sent by most backends and used for local products.
    Number(i64),
    /// Opaque string ID.
    Text(String),
}

impl ProductId {
    /// Synthetic ID for a locally-created product: the creation instant in
    /// Unix milliseconds.
    #[must_use]
    pub fn synthetic(created_at: DateTime<Utc>) -> Self {
        Self::Number(created_at.timestamp_millis())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_deserializes_number_or_string() {
        let n: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(n, ProductId::Number(42));

        let s: ProductId = serde_json::from_str("\"64f1c2\"").unwrap();
        assert_eq!(s, ProductId::Text("64f1c2".to_owned()));
    }

    #[test]
    fn test_synthetic_uses_unix_millis() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(ProductId::synthetic(at), ProductId::Number(1_700_000_000_123));
    }

    #[test]
    fn test_display() {
        assert_eq!(ProductId::from(7).to_string(), "7");
        assert_eq!(ProductId::from("abc").to_string(), "abc");
    }
}
