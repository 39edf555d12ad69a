//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    cart::{errors::into_api_error, get::CartViewResponse},
    envelope::{ApiError, ApiResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
///
/// Deletes a whole cart line; there is no decrement-by-one semantics.
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found in cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CartViewResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let view = state
        .app
        .cart
        .remove_item(id.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(ApiResponse::with_message(
        "Item removed from cart",
        view.into(),
    )))
}
