//! Shared application state.

use std::sync::Arc;

use domain::{CartRepository, CartStore, InMemoryCartRepository, StaticCatalog};

/// Shared application state accessible from all handlers.
pub struct AppState<R: CartRepository> {
    pub catalog: Arc<StaticCatalog>,
    pub carts: CartStore<R, StaticCatalog>,
}

impl<R: CartRepository> AppState<R> {
    /// Creates state over the given catalog and cart repository.
    pub fn new(catalog: Arc<StaticCatalog>, repository: R) -> Self {
        Self {
            carts: CartStore::new(repository, catalog.clone()),
            catalog,
        }
    }
}

impl AppState<InMemoryCartRepository> {
    /// Creates state with an empty in-memory cart repository.
    pub fn in_memory(catalog: StaticCatalog) -> Self {
        Self::new(Arc::new(catalog), InMemoryCartRepository::new())
    }
}
