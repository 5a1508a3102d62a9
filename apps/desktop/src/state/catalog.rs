//! # Catalog State
//!
//! The product list currently shown, as last loaded from the store.
//!
//! ## Refresh Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Refresh                                      │
//! │                                                                         │
//! │  Category picked ──► load_products ──► store query ──► replace()       │
//! │                                                            │            │
//! │  Keystroke in search box ──► search_products ──► views(term, today)   │
//! │                                                                         │
//! │  Add / edit / delete ──► caller runs load_products again               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cache is only replaced after a successful load, so a failed query
//! leaves the previous list on screen.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use cosmo_core::catalog::visible_products;
use cosmo_core::{CategoryFilter, Product, ProductView};

/// Last successful load.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    pub products: Vec<Product>,
    pub filter: CategoryFilter,
}

impl LoadedCatalog {
    /// Swaps in a freshly loaded list.
    pub fn replace(&mut self, filter: CategoryFilter, products: Vec<Product>) {
        self.filter = filter;
        self.products = products;
    }

    /// Visible cards for a search term, classified against `today`.
    pub fn views(&self, term: &str, today: NaiveDate) -> Vec<ProductView> {
        visible_products(&self.products, self.filter, term, today)
    }
}

/// Shared catalog state.
///
/// `Arc<Mutex<_>>`: every command that touches it either reads the whole
/// list or replaces it, and both are quick.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<Mutex<LoadedCatalog>>,
}

impl CatalogState {
    /// Creates an empty catalog state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the catalog.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let views = catalog_state.with_catalog(|c| c.views("serum", today));
    /// ```
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&LoadedCatalog) -> R,
    {
        // A panic mid-replace can only leave a stale list behind
        let catalog = self.catalog.lock().unwrap_or_else(|e| e.into_inner());
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut LoadedCatalog) -> R,
    {
        let mut catalog = self.catalog.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut catalog)
    }
}
