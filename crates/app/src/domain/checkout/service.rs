//! Checkout service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;

use crate::domain::{
    cart::CartService,
    checkout::{
        errors::CheckoutServiceError,
        models::{NewOrder, OrderStatus, Receipt},
    },
};

/// Checkout processor.
///
/// Stateless apart from its handle on the cart service, which it clears
/// after a successful order.
pub struct Processor {
    cart: Arc<dyn CartService>,
}

impl Processor {
    #[must_use]
    pub fn new(cart: Arc<dyn CartService>) -> Self {
        Self { cart }
    }
}

impl std::fmt::Debug for Processor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Processor").finish_non_exhaustive()
    }
}

#[async_trait]
impl CheckoutService for Processor {
    async fn checkout(&self, order: NewOrder) -> Result<Receipt, CheckoutServiceError> {
        if order.items.is_empty() {
            return Err(CheckoutServiceError::EmptyCart);
        }

        if order.customer_name.trim().is_empty() || order.customer_email.trim().is_empty() {
            return Err(CheckoutServiceError::MissingCustomer);
        }

        // The total comes from the submitted snapshot, not from the server
        // cart; the snapshot is the authoritative order contents here.
        let total = order
            .items
            .iter()
            .map(|item| item.price * Decimal::from(item.qty))
            .sum::<Decimal>()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let timestamp = Timestamp::now();
        let order_id = format!("ORD{}", timestamp.as_millisecond());

        self.cart.clear().await;

        info!(order_id, %total, "order placed");

        Ok(Receipt {
            order_id,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            items: order.items,
            total,
            timestamp,
            status: OrderStatus::Confirmed,
        })
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Validate the submitted order, produce a receipt, and clear the cart.
    /// Failure paths never touch the cart.
    async fn checkout(&self, order: NewOrder) -> Result<Receipt, CheckoutServiceError>;
}
