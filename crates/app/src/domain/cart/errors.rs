//! Cart service errors.

use thiserror::Error;

use crate::domain::catalog::CatalogServiceError;

#[derive(Debug, Error)]
pub enum CartServiceError {
    #[error("product id must be a positive integer")]
    InvalidProduct,

    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    #[error("product not found")]
    ProductNotFound,

    #[error("cart line not found")]
    LineNotFound,
}

impl From<CatalogServiceError> for CartServiceError {
    fn from(error: CatalogServiceError) -> Self {
        match error {
            CatalogServiceError::NotFound => Self::ProductNotFound,
        }
    }
}
