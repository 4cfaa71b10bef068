//! Catalog product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as returned by the remote catalog or created locally.
///
/// Field names on the wire follow the backend (`nome`, `preco`, `imagem`).
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Backend ID, or a synthetic one for local products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Unit price.
    #[serde(rename = "preco", default)]
    pub price: Price,
    /// Image URI. May carry stray whitespace from the backend.
    #[serde(rename = "imagem", default)]
    pub image: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Create a product without an ID or description.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price, image: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            image: image.into(),
            description: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assign a synthetic ID derived from `now` unless one is already set.
    pub fn ensure_id(&mut self, now: DateTime<Utc>) {
        if self.id.is_none() {
            self.id = Some(ProductId::synthetic(now));
        }
    }

    /// The image URI with surrounding whitespace removed, or `None` if blank.
    #[must_use]
    pub fn image_uri(&self) -> Option<&str> {
        let trimmed = self.image.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "_id": "ignored",
            "nome": "Batom Matte",
            "preco": 39.9,
            "imagem": " https://cdn.example.com/batom.png \n"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, None);
        assert_eq!(product.name, "Batom Matte");
        assert_eq!(product.price.to_string(), "R$ 39,90");
        assert_eq!(
            product.image_uri(),
            Some("https://cdn.example.com/batom.png")
        );
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_deserialize_with_id_and_description() {
        let json = r#"{"id": 3, "nome": "Base", "preco": 80, "imagem": "x.png", "description": "Cobertura alta"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, Some(ProductId::Number(3)));
        assert_eq!(product.description.as_deref(), Some("Cobertura alta"));
    }

    #[test]
    fn test_missing_price_and_image_still_decode() {
        let product: Product = serde_json::from_str(r#"{"nome": "Pincel"}"#).unwrap();
        assert_eq!(product.price, Price::default());
        assert_eq!(product.image_uri(), None);
    }

    #[test]
    fn test_ensure_id_keeps_existing() {
        let now = Utc.timestamp_millis_opt(1_000).unwrap();

        let mut local = Product::new("Rímel", Price::default(), "r.png");
        local.ensure_id(now);
        assert_eq!(local.id, Some(ProductId::Number(1_000)));

        let mut remote = Product::new("Blush", Price::default(), "b.png");
        remote.id = Some(ProductId::from("abc"));
        remote.ensure_id(now);
        assert_eq!(remote.id, Some(ProductId::from("abc")));
    }

    #[test]
    fn test_serializes_backend_field_names() {
        let product = Product::new("Pó", Price::from_f64(25.0).unwrap(), "p.png");
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["nome"], "Pó");
        assert_eq!(value["imagem"], "p.png");
        assert!(value.get("id").is_none());
    }
}
