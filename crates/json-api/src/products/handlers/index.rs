//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use shopfront_app::domain::catalog::models::Product;

use crate::{
    envelope::{ApiError, ApiResponse},
    extensions::*,
    money,
    state::State,
};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The product identifier
    pub id: u64,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Image URI
    pub image: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: money::to_f64(product.price),
            image: product.image,
        }
    }
}

/// Product Index Handler
///
/// Returns the product catalog.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<ApiResponse<Vec<ProductResponse>>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state.app.catalog.list_products().await;

    Ok(Json(ApiResponse::ok(
        products.into_iter().map(Into::into).collect(),
    )))
}
