//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    cart::{errors::into_api_error, get::CartLineResponse},
    envelope::{ApiError, ApiResponse},
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    pub product_id: u64,
    pub qty: u32,
}

/// Add Cart Item Handler
///
/// Adds a quantity of a product to the cart. Adding a product already in the
/// cart merges into its existing line (200); otherwise a new line is created
/// (201). Either way the body carries the full updated cart.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Quantity merged into an existing line"),
        (status_code = StatusCode::CREATED, description = "New cart line created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or non-positive fields"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ApiResponse<Vec<CartLineResponse>>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let addition = state
        .app
        .cart
        .add_item(request.product_id, request.qty)
        .await
        .map_err(into_api_error)?;

    let items: Vec<CartLineResponse> = addition.items.into_iter().map(Into::into).collect();

    if addition.merged {
        return Ok(Json(ApiResponse::with_message(
            "Cart updated successfully",
            items,
        )));
    }

    res.status_code(StatusCode::CREATED);

    Ok(Json(ApiResponse::with_message("Item added to cart", items)))
}
