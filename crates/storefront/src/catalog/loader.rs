//! Catalog view-state and in-memory product list.

use chrono::{DateTime, Utc};
use studio_makeup_core::Product;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use super::{CatalogClient, CatalogError};

/// Why the catalog could not be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    /// The endpoint answered, but not with a product list.
    Unavailable,
    /// The endpoint could not be reached.
    Connection,
}

impl LoadFailure {
    /// Static user-facing message. Never derived from the failure detail.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Unavailable => "Erro ao carregar produtos",
            Self::Connection => "Erro de conexão com a API",
        }
    }
}

impl From<&CatalogError> for LoadFailure {
    fn from(err: &CatalogError) -> Self {
        match err {
            CatalogError::Http(_) => Self::Connection,
            CatalogError::Status(_) | CatalogError::Parse(_) => Self::Unavailable,
        }
    }
}

/// What the catalog screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Fetch in flight (initial state).
    #[default]
    Loading,
    /// Fetch failed; no list is shown.
    Failed(LoadFailure),
    /// Products to render, in display order.
    Ready(Vec<Product>),
}

impl ViewState {
    /// Prepend a locally-created product, stamping it with a synthetic ID
    /// derived from `now`.
    ///
    /// `Loading` becomes a one-product list. A `Failed` state is kept as is
    /// so the failure stays on screen.
    ///
    /// # Errors
    ///
    /// Returns the recorded `LoadFailure` if the state is `Failed`.
    pub fn add_local_product_at(
        &mut self,
        mut product: Product,
        now: DateTime<Utc>,
    ) -> Result<(), LoadFailure> {
        match self {
            Self::Failed(failure) => return Err(*failure),
            Self::Ready(products) => {
                product.ensure_id(now);
                products.insert(0, product);
            }
            Self::Loading => {
                product.ensure_id(now);
                *self = Self::Ready(vec![product]);
            }
        }
        Ok(())
    }

    /// [`add_local_product_at`](Self::add_local_product_at) with the current
    /// time.
    ///
    /// # Errors
    ///
    /// Returns the recorded `LoadFailure` if the state is `Failed`.
    pub fn add_local_product(&mut self, product: Product) -> Result<(), LoadFailure> {
        self.add_local_product_at(product, Utc::now())
    }
}

/// Result of a single [`CatalogLoader::load`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetched list replaced the current one.
    Loaded(usize),
    /// The view-state switched to [`ViewState::Failed`].
    Failed(LoadFailure),
    /// Cancelled before completion; the view-state was not touched.
    Cancelled,
}

/// Drives the catalog view-state.
///
/// One [`load`](Self::load) per activation. Locally added products live only
/// in this loader and are lost when it is dropped.
pub struct CatalogLoader {
    client: CatalogClient,
    state: ViewState,
}

impl CatalogLoader {
    /// Create a loader in the [`ViewState::Loading`] state.
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            state: ViewState::Loading,
        }
    }

    /// Current view-state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Products currently shown; empty unless the state is `Ready`.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match &self.state {
            ViewState::Ready(products) => products,
            ViewState::Loading | ViewState::Failed(_) => &[],
        }
    }

    /// Fetch the catalog once and update the view-state.
    ///
    /// If `cancel` fires first the request is dropped and the state is left
    /// as it was.
    #[instrument(skip_all)]
    pub async fn load(&mut self, cancel: &CancellationToken) -> LoadOutcome {
        let client = self.client.clone();
        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            result = client.fetch_products() => Some(result),
        };

        match result {
            None => {
                info!("Catalog load cancelled");
                LoadOutcome::Cancelled
            }
            Some(Ok(products)) => {
                let count = products.len();
                info!(count, "Catalog loaded");
                self.state = ViewState::Ready(products);
                LoadOutcome::Loaded(count)
            }
            Some(Err(e)) => {
                let failure = LoadFailure::from(&e);
                warn!(error = %e, ?failure, "Catalog load failed");
                self.state = ViewState::Failed(failure);
                LoadOutcome::Failed(failure)
            }
        }
    }

    /// Prepend a locally-created product, stamping it with a synthetic ID.
    ///
    /// # Errors
    ///
    /// Returns the `LoadFailure` of the last fetch if the view shows an
    /// error; the product is not added.
    pub fn add_local_product(&mut self, product: Product) -> Result<(), LoadFailure> {
        self.add_local_product_at(product, Utc::now())
    }

    /// [`add_local_product`](Self::add_local_product) with an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns the `LoadFailure` of the last fetch if the view shows an
    /// error; the product is not added.
    pub fn add_local_product_at(
        &mut self,
        product: Product,
        now: DateTime<Utc>,
    ) -> Result<(), LoadFailure> {
        let name = product.name.clone();
        match self.state.add_local_product_at(product, now) {
            Ok(()) => {
                info!(%name, "Local product added");
                Ok(())
            }
            Err(failure) => {
                warn!(%name, ?failure, "Local product rejected: catalog failed to load");
                Err(failure)
            }
        }
    }
}
