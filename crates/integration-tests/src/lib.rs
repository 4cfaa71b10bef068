//! Integration tests for the Studio Makeup storefront client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p studio-makeup-integration-tests
//! ```
//!
//! No external services are needed: the catalog endpoint is a `wiremock`
//! server and the key-value store lives in a temp directory.
//!
//! # Test Categories
//!
//! - `catalog_flow` - fetch, view-state, local additions, rendering
//! - `local_auth` - registration and login over a `FileStore`

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use studio_makeup_storefront::catalog::{CatalogClient, CatalogLoader};
use studio_makeup_storefront::config::CatalogConfig;
use studio_makeup_storefront::services::auth::AuthService;
use studio_makeup_storefront::storage::FileStore;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock backend serves the product list on.
pub const PRODUCTS_PATH: &str = "/api/produtos";

/// A catalog as the backend sends it: Portuguese field names, no IDs,
/// stray whitespace in image URIs.
#[must_use]
pub fn sample_catalog() -> serde_json::Value {
    serde_json::json!([
        {"nome": "Batom Matte", "preco": 39.9, "imagem": " https://cdn.example.com/batom.png"},
        {"nome": "Base Líquida", "preco": 89, "imagem": "https://cdn.example.com/base.png"},
        {"nome": "Paleta de Sombras", "preco": 19.5, "imagem": "https://cdn.example.com/paleta.png\n"}
    ])
}

/// Start a mock backend answering the product list with `response`.
pub async fn catalog_server(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

/// A loader pointed at the mock backend.
#[must_use]
pub fn loader_for(server: &MockServer) -> CatalogLoader {
    let url = Url::parse(&format!("{}{PRODUCTS_PATH}", server.uri())).unwrap();
    CatalogLoader::new(CatalogClient::new(&CatalogConfig::with_url(url)).unwrap())
}

/// An auth service over a fresh on-disk store. Keep the `TempDir` alive for
/// the duration of the test.
#[must_use]
pub fn file_auth() -> (AuthService<FileStore>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("storage.json"));
    (AuthService::new(store), dir)
}
