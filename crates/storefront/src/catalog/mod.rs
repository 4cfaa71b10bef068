//! Remote product catalog.
//!
//! # Architecture
//!
//! - [`CatalogClient`] performs the single `GET` against the product list
//!   endpoint and decodes the JSON array
//! - [`CatalogLoader`] owns the loading/error/ready view-state and the
//!   in-memory list, including locally-created products
//! - [`NewProductForm`] validates user input for a local product
//!
//! Nothing here retries, paginates or caches. Local products are never sent
//! back to the backend.

mod form;
mod loader;

pub use form::{FormError, NewProductForm};
pub use loader::{CatalogLoader, LoadFailure, LoadOutcome, ViewState};

use std::sync::Arc;

use reqwest::header::ACCEPT;
use studio_makeup_core::Product;
use thiserror::Error;
use tracing::{debug, error, instrument};
use url::Url;

use crate::config::CatalogConfig;

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure (DNS, connect, TLS, timeout, broken body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("catalog endpoint returned {0}")]
    Status(reqwest::StatusCode),

    /// The body is not a product array.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the product list endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Http` if the HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client: builder.build()?,
                endpoint: config.url.clone(),
            }),
        })
    }

    /// The endpoint this client reads from.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Http` on transport failure,
    /// `CatalogError::Status` on a non-2xx answer and
    /// `CatalogError::Parse` if the body is not a product array.
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .inner
            .client
            .get(self.inner.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog endpoint returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        let products: Vec<Product> = match serde_json::from_str(&response_text) {
            Ok(p) => p,
            Err(e) => {
                error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                return Err(CatalogError::Parse(e));
            }
        };

        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }
}
