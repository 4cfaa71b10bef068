//! Text rendering of the catalog view-state.
//!
//! Mirrors what the catalog screen shows: a loading line, an error line, or
//! the welcome header followed by one card per product and the contact
//! footer.

use std::fmt::Write as _;

use studio_makeup_core::Product;

use crate::catalog::ViewState;

/// Shown while the fetch is in flight.
pub const LOADING_TEXT: &str = "Carregando produtos...";
/// Header above the product list.
pub const WELCOME_TEXT: &str = "Bem Vindo Ao Studio Makeup";
/// Shown instead of a blank image URI.
pub const IMAGE_PLACEHOLDER: &str = "Imagem não disponível";
/// Label of the card action.
pub const BUY_LABEL: &str = "Comprar";

const CONTACT_LINES: &[&str] = &[
    "Contato:",
    "- WhatsApp: (99) 9999-9999",
    "- Instagram: @llais.amorim",
];

/// Product display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub name: String,
    pub price: String,
    /// Trimmed image URI, or `None` to show the placeholder.
    pub image: Option<String>,
    pub description: Option<String>,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image_uri().map(str::to_owned),
            description: product.description.clone().filter(|d| !d.is_empty()),
        }
    }
}

impl ProductCardView {
    /// Render the card as text lines.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.name);
        let _ = writeln!(out, "{}", self.price);
        let _ = writeln!(
            out,
            "{}",
            self.image.as_deref().unwrap_or(IMAGE_PLACEHOLDER)
        );
        if let Some(description) = &self.description {
            let _ = writeln!(out, "{description}");
        }
        let _ = writeln!(out, "[{BUY_LABEL}]");
        out
    }
}

/// Cards for every product, in list order.
#[must_use]
pub fn product_cards(products: &[Product]) -> Vec<ProductCardView> {
    products.iter().map(ProductCardView::from).collect()
}

/// Render the whole catalog screen for a view-state.
#[must_use]
pub fn render_view_state(state: &ViewState) -> String {
    match state {
        ViewState::Loading => format!("{LOADING_TEXT}\n"),
        ViewState::Failed(failure) => format!("{}\n", failure.message()),
        ViewState::Ready(products) => {
            let mut out = format!("{WELCOME_TEXT}\n\n");
            for card in product_cards(products) {
                out.push_str(&card.render());
                out.push('\n');
            }
            for line in CONTACT_LINES {
                out.push_str(line);
                out.push('\n');
            }
            out
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use studio_makeup_core::Price;

    use super::*;
    use crate::catalog::LoadFailure;

    fn batom() -> Product {
        Product::new("Batom", Price::from_f64(19.5).unwrap(), "  https://cdn/b.png ")
    }

    #[test]
    fn test_card_from_product() {
        let card = ProductCardView::from(&batom().with_description("Matte"));
        assert_eq!(card.price, "R$ 19,50");
        assert_eq!(card.image.as_deref(), Some("https://cdn/b.png"));
        assert_eq!(card.description.as_deref(), Some("Matte"));
    }

    #[test]
    fn test_card_placeholder_for_blank_image() {
        let card = ProductCardView::from(&Product::new("Pincel", Price::default(), "  "));
        assert_eq!(card.image, None);
        assert!(card.render().contains(IMAGE_PLACEHOLDER));
        assert!(card.render().contains("R$ 0,00"));
    }

    #[test]
    fn test_render_loading_and_error() {
        assert_eq!(render_view_state(&ViewState::Loading), "Carregando produtos...\n");

        let failed = render_view_state(&ViewState::Failed(LoadFailure::Connection));
        assert_eq!(failed, "Erro de conexão com a API\n");
        assert!(!failed.contains(BUY_LABEL));
    }

    #[test]
    fn test_render_ready_one_card_per_product_in_order() {
        let products = vec![batom(), Product::new("Base", Price::default(), "f.png")];
        let out = render_view_state(&ViewState::Ready(products));

        assert!(out.starts_with(WELCOME_TEXT));
        assert_eq!(out.matches(BUY_LABEL).count(), 2);
        assert!(out.find("Batom").unwrap() < out.find("Base").unwrap());
        assert!(out.contains("@llais.amorim"));
    }
}
