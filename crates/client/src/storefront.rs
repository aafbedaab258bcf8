//! Catalog page shell: load state, dispatch, render model.

use chrono::{DateTime, Utc};
use storefront_catalog::{CatalogAction, CatalogState, DerivedCatalog, Product, categories, derive};
use storefront_core::Reducer;

use crate::fetch::{FetchError, ProductSource};

/// Outcome of the fetch-on-mount.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded {
        /// Canonical list, in the order the API returned it.
        products: Vec<Product>,
        fetched_at: DateTime<Utc>,
    },
    /// User-facing message shown in place of the list.
    Failed(String),
}

impl LoadState {
    pub fn from_fetch(result: Result<Vec<Product>, FetchError>) -> Self {
        match result {
            Ok(products) => LoadState::Loaded {
                products,
                fetched_at: Utc::now(),
            },
            Err(err) => {
                tracing::error!(error = %err, "failed to load products");
                LoadState::Failed(err.to_string())
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        match self {
            LoadState::Loaded { products, .. } => products,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }
}

/// What the page shows right now.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Loading,
    Failed(&'a str),
    Catalog {
        state: &'a CatalogState,
        derived: DerivedCatalog<'a>,
        fetched_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone)]
pub struct Storefront {
    load: LoadState,
    state: CatalogState,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

impl Storefront {
    /// Page before the fetch has completed.
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            state: CatalogState::new(),
        }
    }

    /// Fetch once and store the canonical list or the error.
    pub async fn mount<S: ProductSource>(source: &S) -> Self {
        let load = LoadState::from_fetch(source.fetch_products().await);
        Self {
            load,
            state: CatalogState::new(),
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Replace the view state with `reduce(state, action)`.
    pub fn dispatch(&mut self, action: CatalogAction) {
        self.state = self.state.reduce(&action);
    }

    /// Category labels for the picker, in canonical order.
    pub fn categories(&self) -> Vec<&str> {
        categories(self.load.products())
    }

    pub fn view(&self) -> View<'_> {
        match &self.load {
            LoadState::Loading => View::Loading,
            LoadState::Failed(message) => View::Failed(message),
            LoadState::Loaded {
                products,
                fetched_at,
            } => View::Catalog {
                state: &self.state,
                derived: derive(products, &self.state),
                fetched_at: *fetched_at,
            },
        }
    }
}
