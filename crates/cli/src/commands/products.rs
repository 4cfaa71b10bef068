//! Catalog commands.

use tokio_util::sync::CancellationToken;
use tracing::info;

use studio_makeup_storefront::catalog::{
    CatalogClient, CatalogLoader, LoadOutcome, NewProductForm, ViewState,
};
use studio_makeup_storefront::config::StorefrontConfig;
use studio_makeup_storefront::error::AppError;
use studio_makeup_storefront::views::render_view_state;

use super::{CliError, output};

/// Build a loader and a token that Ctrl+C cancels.
fn activate(config: &StorefrontConfig) -> Result<(CatalogLoader, CancellationToken), AppError> {
    let client = CatalogClient::new(&config.catalog)?;
    info!(endpoint = %client.endpoint(), "Loading catalog");

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    Ok((CatalogLoader::new(client), cancel))
}

/// Fetch and render the remote catalog.
///
/// # Errors
///
/// Returns `CliError::CatalogUnavailable` after rendering the error state.
pub async fn list(config: &StorefrontConfig) -> Result<(), CliError> {
    let (mut loader, cancel) = activate(config)?;

    output(&render_view_state(loader.state()))?;
    match loader.load(&cancel).await {
        LoadOutcome::Cancelled => Ok(()),
        LoadOutcome::Loaded(_) => {
            output(&render_view_state(loader.state()))?;
            Ok(())
        }
        LoadOutcome::Failed(_) => {
            output(&render_view_state(loader.state()))?;
            Err(CliError::CatalogUnavailable)
        }
    }
}

/// Validate a new product, add it to an in-memory catalog and render it.
///
/// Without `with_remote` the catalog starts empty and nothing touches the
/// network.
///
/// # Errors
///
/// Returns `CliError::App` if the form is invalid and
/// `CliError::CatalogUnavailable` after rendering the error state if the
/// remote catalog failed to load.
pub async fn add(
    config: &StorefrontConfig,
    name: String,
    price: String,
    image: String,
    with_remote: bool,
) -> Result<(), CliError> {
    let product = NewProductForm { name, price, image }
        .into_product()
        .map_err(AppError::from)?;

    if !with_remote {
        let mut state = ViewState::default();
        if state.add_local_product(product).is_err() {
            return Err(CliError::CatalogUnavailable);
        }
        output(&render_view_state(&state))?;
        return Ok(());
    }

    let (mut loader, cancel) = activate(config)?;
    match loader.load(&cancel).await {
        LoadOutcome::Cancelled => return Ok(()),
        LoadOutcome::Failed(_) => {
            output(&render_view_state(loader.state()))?;
            return Err(CliError::CatalogUnavailable);
        }
        LoadOutcome::Loaded(_) => {}
    }

    if loader.add_local_product(product).is_err() {
        return Err(CliError::CatalogUnavailable);
    }
    output(&render_view_state(loader.state()))?;
    Ok(())
}
