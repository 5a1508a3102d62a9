//! # Asset State
//!
//! The managed image directory, shared by the add and edit commands.

use std::path::Path;

use cosmo_db::AssetStore;

/// Wrapper around `AssetStore` for command state.
#[derive(Debug, Clone)]
pub struct AssetState {
    store: AssetStore,
}

impl AssetState {
    /// Creates the state for images kept under `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        AssetState {
            store: AssetStore::new(root.as_ref()),
        }
    }

    /// Returns a reference to the inner AssetStore.
    pub fn inner(&self) -> &AssetStore {
        &self.store
    }
}
