//! Checkout Models

use jiff::Timestamp;
use rust_decimal::Decimal;

/// Checkout Item Model
///
/// One line of the client-submitted cart snapshot. The snapshot is passed by
/// value; it is not a reference into the server-side cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutItem {
    pub product_id: Option<u64>,
    pub name: String,
    pub price: Decimal,
    pub image: Option<String>,
    pub qty: u32,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub items: Vec<CheckoutItem>,
    pub customer_name: String,
    pub customer_email: String,
}

/// Order status. Checkout has no pending or failed state transitions; a
/// successful checkout is confirmed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Confirmed,
}

impl OrderStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
        }
    }
}

/// Receipt Model
///
/// Immutable record produced once per successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Derived from the wall clock at checkout time; distinguishable within
    /// a process, not guaranteed globally unique.
    pub order_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<CheckoutItem>,
    pub total: Decimal,
    pub timestamp: Timestamp,
    pub status: OrderStatus,
}
