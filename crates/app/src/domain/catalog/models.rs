//! Catalog Models

use rust_decimal::Decimal;

/// Product Model
///
/// Products are seeded at process start and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}
