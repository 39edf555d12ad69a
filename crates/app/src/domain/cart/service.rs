//! Cart service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::{Decimal, RoundingStrategy};
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::{
    cart::{
        errors::CartServiceError,
        models::{CartAddition, CartLine, CartView},
    },
    catalog::CatalogService,
};

/// In-memory cart store.
///
/// All mutation goes through a single mutex, so cart invariants (at most one
/// line per product, strictly increasing line ids) hold under parallel
/// request handling.
pub struct InMemoryCart {
    catalog: Arc<dyn CatalogService>,
    state: Mutex<CartState>,
}

#[derive(Debug)]
struct CartState {
    lines: Vec<CartLine>,
    next_line_id: u64,
}

impl CartState {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            next_line_id: 1,
        }
    }

    /// Allocate the next line id. Ids start at 1 and are never reused, even
    /// after removal or a cart clear.
    fn allocate_line_id(&mut self) -> u64 {
        let id = self.next_line_id;

        self.next_line_id += 1;

        id
    }
}

impl InMemoryCart {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog,
            state: Mutex::new(CartState::new()),
        }
    }
}

impl std::fmt::Debug for InMemoryCart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCart").finish_non_exhaustive()
    }
}

/// Sum of `price * qty` over the lines, rounded to two decimal places with
/// half-away-from-zero midpoint handling.
fn total(lines: &[CartLine]) -> Decimal {
    lines
        .iter()
        .map(|line| line.price * Decimal::from(line.qty))
        .sum::<Decimal>()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[async_trait]
impl CartService for InMemoryCart {
    async fn add_item(
        &self,
        product_id: u64,
        qty: u32,
    ) -> Result<CartAddition, CartServiceError> {
        if product_id == 0 {
            return Err(CartServiceError::InvalidProduct);
        }

        if qty == 0 {
            return Err(CartServiceError::InvalidQuantity);
        }

        let product = self.catalog.get_product(product_id).await?;

        let mut state = self.state.lock().await;

        if let Some(line) = state
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            // No upper bound on quantity; saturate rather than wrap.
            line.qty = line.qty.saturating_add(qty);

            info!(product_id, qty, line_id = line.id, "merged cart line");

            return Ok(CartAddition {
                merged: true,
                items: state.lines.clone(),
            });
        }

        let line = CartLine {
            id: state.allocate_line_id(),
            product_id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            qty,
        };

        info!(product_id, qty, line_id = line.id, "added cart line");

        state.lines.push(line);

        Ok(CartAddition {
            merged: false,
            items: state.lines.clone(),
        })
    }

    async fn get_cart(&self) -> CartView {
        let state = self.state.lock().await;

        CartView {
            items: state.lines.clone(),
            total: total(&state.lines),
        }
    }

    async fn remove_item(&self, line_id: u64) -> Result<CartView, CartServiceError> {
        let mut state = self.state.lock().await;

        let index = state
            .lines
            .iter()
            .position(|line| line.id == line_id)
            .ok_or(CartServiceError::LineNotFound)?;

        state.lines.remove(index);

        info!(line_id, "removed cart line");

        Ok(CartView {
            items: state.lines.clone(),
            total: total(&state.lines),
        })
    }

    async fn clear(&self) {
        let mut state = self.state.lock().await;

        state.lines.clear();

        info!("cleared cart");
    }
}

#[automock]
#[async_trait]
pub trait CartService: Send + Sync {
    /// Add a quantity of a product to the cart, merging into an existing
    /// line for the same product when one is present.
    async fn add_item(&self, product_id: u64, qty: u32)
        -> Result<CartAddition, CartServiceError>;

    /// Retrieve the current cart lines and total.
    async fn get_cart(&self) -> CartView;

    /// Remove one whole line from the cart.
    async fn remove_item(&self, line_id: u64) -> Result<CartView, CartServiceError>;

    /// Empty the cart unconditionally.
    async fn clear(&self);
}
