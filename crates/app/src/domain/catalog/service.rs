//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::catalog::{errors::CatalogServiceError, models::Product, seed};

/// Read-only product catalog backed by the fixed seed list.
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    products: Vec<Product>,
}

impl SeedCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: seed::products(),
        }
    }

    /// Build a catalog from an explicit product list.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogService for SeedCatalog {
    async fn list_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    async fn get_product(&self, id: u64) -> Result<Product, CatalogServiceError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(CatalogServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Vec<Product>;

    /// Retrieve a single product.
    async fn get_product(&self, id: u64) -> Result<Product, CatalogServiceError>;
}
