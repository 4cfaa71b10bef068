//! Subcommand implementations.

pub mod auth;
pub mod products;

use std::io::Write;

use thiserror::Error;

use studio_makeup_storefront::error::AppError;

/// Why a command failed.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
    /// The catalog view rendered its error state.
    #[error("catalog unavailable")]
    CatalogUnavailable,
}

/// Write a block of text to stdout.
pub fn output(text: &str) -> Result<(), std::io::Error> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}

/// Best-effort write of a failure alert to stdout.
pub fn report(text: &str) {
    if let Err(e) = output(text) {
        tracing::error!("Failed to write output: {e}");
    }
}
