//! Domain services.

pub mod cart;
pub mod catalog;
pub mod checkout;
