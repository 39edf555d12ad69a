//! Cart

pub mod errors;
pub mod models;
pub mod service;

pub use errors::CartServiceError;
pub use service::*;
