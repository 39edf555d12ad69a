//! Cart Models

use rust_decimal::Decimal;

/// Cart Line Model
///
/// One row in the cart for a distinct product. The `name`, `price`, and
/// `image` fields are copied from the product at insert time and are never
/// re-resolved on later reads.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: u64,
    pub product_id: u64,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub qty: u32,
}

/// Cart View Model
///
/// The ordered cart lines plus the computed total, rounded to two decimal
/// places.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub total: Decimal,
}

/// Result of adding a product to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartAddition {
    /// Whether the quantity was merged into an existing line rather than a
    /// new line being created.
    pub merged: bool,

    /// The full updated cart.
    pub items: Vec<CartLine>,
}
