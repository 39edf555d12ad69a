//! Checkout service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("customer name and email are required")]
    MissingCustomer,
}
