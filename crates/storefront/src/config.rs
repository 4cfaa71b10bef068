//! Storefront client configuration loaded from environment variables.
//!
//! Every variable is optional; an empty environment reproduces the fixed
//! endpoint and storage location the app has always used.
//!
//! # Environment Variables
//!
//! - `STUDIO_CATALOG_URL` - Product list endpoint
//!   (default: `https://studio-make-up-backend.onrender.com/api/produtos`)
//! - `STUDIO_STORAGE_PATH` - Key-value store file (default: `studio-makeup-storage.json`)
//! - `STUDIO_CATALOG_TIMEOUT_SECS` - Request timeout for the catalog fetch (default: none)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default product list endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://studio-make-up-backend.onrender.com/api/produtos";

/// Default location of the on-disk key-value store.
pub const DEFAULT_STORAGE_PATH: &str = "studio-makeup-storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog API configuration
    pub catalog: CatalogConfig,
    /// Path of the on-disk key-value store
    pub storage_path: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Remote catalog configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Product list endpoint
    pub url: Url,
    /// Optional request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl CatalogConfig {
    /// Configuration pointing at a specific endpoint with no timeout.
    #[must_use]
    pub const fn with_url(url: Url) -> Self {
        Self { url, timeout: None }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog = CatalogConfig::from_env()?;
        let storage_path = PathBuf::from(get_env_or_default(
            "STUDIO_STORAGE_PATH",
            DEFAULT_STORAGE_PATH,
        ));

        Ok(Self {
            catalog,
            storage_path,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = parse_catalog_url(
            "STUDIO_CATALOG_URL",
            &get_env_or_default("STUDIO_CATALOG_URL", DEFAULT_CATALOG_URL),
        )?;
        let timeout = get_optional_env("STUDIO_CATALOG_TIMEOUT_SECS")
            .map(|v| parse_timeout("STUDIO_CATALOG_TIMEOUT_SECS", &v))
            .transpose()?;

        Ok(Self { url, timeout })
    }
}

fn parse_catalog_url(var: &str, value: &str) -> Result<Url, ConfigError> {
    let url =
        Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar(var.to_owned(), e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEnvVar(
            var.to_owned(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}

fn parse_timeout(var: &str, value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidEnvVar(
            var.to_owned(),
            "timeout must be positive".to_owned(),
        )),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::InvalidEnvVar(var.to_owned(), e.to_string())),
    }
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_owned())
}
