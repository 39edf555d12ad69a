//! Shared application domain modules for the shopfront demo service.

pub mod context;
pub mod domain;
