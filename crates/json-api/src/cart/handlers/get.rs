//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::cart::models::{CartLine, CartView};

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    money,
    state::State,
};

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartLineResponse {
    /// The cart line identifier
    pub id: u64,

    /// The product this line refers to
    pub product_id: u64,

    /// Product name copied at insert time
    pub name: String,

    /// Unit price copied at insert time
    pub price: f64,

    /// Image URI copied at insert time
    pub image: String,

    /// Quantity in the cart
    pub qty: u32,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.id,
            product_id: line.product_id,
            name: line.name,
            price: money::to_f64(line.price),
            image: line.image,
            qty: line.qty,
        }
    }
}

/// Cart View Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartViewResponse {
    /// The cart lines, in insertion order
    pub items: Vec<CartLineResponse>,

    /// Sum of price times quantity, rounded to two decimal places
    pub total: f64,
}

impl From<CartView> for CartViewResponse {
    fn from(view: CartView) -> Self {
        Self {
            items: view.items.into_iter().map(Into::into).collect(),
            total: money::to_f64(view.total),
        }
    }
}

/// Get Cart Handler
///
/// Returns the current cart lines and total.
#[endpoint(tags("cart"), summary = "Get Cart")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CartViewResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let view = state.app.cart.get_cart().await;

    Ok(Json(ApiResponse::ok(view.into())))
}
