//! Input form for a locally-created product.

use studio_makeup_core::{Price, Product};
use thiserror::Error;

/// Errors raised when validating a [`NewProductForm`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Name, price or image left blank.
    #[error("name, price and image are required")]
    MissingFields,

    /// The price is not a finite number.
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),
}

/// Raw form input, as typed.
#[derive(Debug, Clone, Default)]
pub struct NewProductForm {
    /// Product name.
    pub name: String,
    /// Price text; either `.` or `,` is accepted as decimal separator.
    pub price: String,
    /// Image URI picked by the user.
    pub image: String,
}

impl NewProductForm {
    /// Validate the form and build the product.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MissingFields` if any field is blank and
    /// `FormError::InvalidPrice` if the price does not parse.
    pub fn into_product(self) -> Result<Product, FormError> {
        let name = self.name.trim();
        let price = self.price.trim();
        let image = self.image.trim();

        if name.is_empty() || price.is_empty() || image.is_empty() {
            return Err(FormError::MissingFields);
        }

        let price = parse_price(price).ok_or_else(|| FormError::InvalidPrice(price.to_owned()))?;

        Ok(Product::new(name, price, image))
    }
}

fn parse_price(input: &str) -> Option<Price> {
    let amount = input.replace(',', ".").parse::<f64>().ok()?;
    if amount.is_finite() {
        Price::from_f64(amount)
    } else {
        None
    }
}
