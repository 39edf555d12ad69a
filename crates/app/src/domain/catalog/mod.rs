//! Catalog

pub mod errors;
pub mod models;
mod seed;
pub mod service;

pub use errors::CatalogServiceError;
pub use service::*;
