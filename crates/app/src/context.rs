//! App Context

use std::sync::Arc;

use crate::domain::{
    cart::{CartService, InMemoryCart},
    catalog::{CatalogService, SeedCatalog},
    checkout::{CheckoutService, Processor},
};

/// Wires the concrete services together.
///
/// A fresh context is a fresh empty cart; tests construct their own context
/// instead of sharing ambient state.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub cart: Arc<dyn CartService>,
    pub checkout: Arc<dyn CheckoutService>,
}

impl AppContext {
    #[must_use]
    pub fn new() -> Self {
        let catalog: Arc<dyn CatalogService> = Arc::new(SeedCatalog::new());
        let cart: Arc<dyn CartService> = Arc::new(InMemoryCart::new(Arc::clone(&catalog)));
        let checkout: Arc<dyn CheckoutService> = Arc::new(Processor::new(Arc::clone(&cart)));

        Self {
            catalog,
            cart,
            checkout,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
