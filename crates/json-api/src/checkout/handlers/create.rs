//! Checkout Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use shopfront_app::domain::checkout::models::{CheckoutItem, NewOrder, Receipt};

use crate::{
    checkout::errors::into_api_error,
    envelope::{ApiError, ApiResponse},
    extensions::*,
    money,
    state::State,
};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutRequest {
    /// The client-side cart snapshot to place the order for
    pub cart_items: Vec<CheckoutItemRequest>,

    /// Customer name
    pub name: String,

    /// Customer email (presence check only; format is a client concern)
    pub email: String,
}

/// Checkout Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub qty: u32,
}

impl TryFrom<CheckoutItemRequest> for CheckoutItem {
    type Error = rust_decimal::Error;

    fn try_from(item: CheckoutItemRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            product_id: item.product_id,
            name: item.name,
            price: Decimal::try_from(item.price)?,
            image: item.image,
            qty: item.qty,
        })
    }
}

/// Checkout Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutItemResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub qty: u32,
}

impl From<CheckoutItem> for CheckoutItemResponse {
    fn from(item: CheckoutItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            price: money::to_f64(item.price),
            image: item.image,
            qty: item.qty,
        }
    }
}

/// Receipt Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptResponse {
    /// Order identifier derived from the checkout wall clock
    pub order_id: String,

    /// Customer name as submitted
    pub customer_name: String,

    /// Customer email as submitted
    pub customer_email: String,

    /// Snapshot of the ordered items
    pub items: Vec<CheckoutItemResponse>,

    /// Order total, rounded to two decimal places
    pub total: f64,

    /// ISO-8601 instant of the checkout
    pub timestamp: String,

    /// Always "Confirmed"
    pub status: String,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            order_id: receipt.order_id,
            customer_name: receipt.customer_name,
            customer_email: receipt.customer_email,
            items: receipt.items.into_iter().map(Into::into).collect(),
            total: money::to_f64(receipt.total),
            timestamp: receipt.timestamp.to_string(),
            status: receipt.status.as_str().to_string(),
        }
    }
}

/// Checkout Handler
///
/// Places an order for the submitted cart snapshot and clears the server
/// cart on success.
#[endpoint(
    tags("checkout"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::OK, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty cart or missing name/email"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<ReceiptResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let items = request
        .cart_items
        .into_iter()
        .map(CheckoutItem::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| {
            warn!("invalid price in checkout payload: {error}");

            ApiError::bad_request("Invalid price value")
        })?;

    let receipt = state
        .app
        .checkout
        .checkout(NewOrder {
            items,
            customer_name: request.name,
            customer_email: request.email,
        })
        .await
        .map_err(into_api_error)?;

    Ok(Json(ApiResponse::with_message(
        "Order placed successfully",
        receipt.into(),
    )))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopfront_app::domain::checkout::{
        CheckoutServiceError, MockCheckoutService, models::OrderStatus,
    };

    use crate::test_helpers::checkout_service;

    use super::*;

    fn make_receipt(order: &NewOrder, total: u32) -> Receipt {
        Receipt {
            order_id: "ORD1700000000000".to_string(),
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            items: order.items.clone(),
            total: Decimal::from(total),
            timestamp: Timestamp::UNIX_EPOCH,
            status: OrderStatus::Confirmed,
        }
    }

    fn make_service(repo: MockCheckoutService) -> Service {
        checkout_service(repo, Router::with_path("api/checkout").post(handler))
    }

    #[tokio::test]
    async fn test_checkout_returns_confirmed_receipt() -> TestResult {
        let mut repo = MockCheckoutService::new();

        repo.expect_checkout()
            .once()
            .withf(|order| {
                order.customer_name == "A"
                    && order.customer_email == "a@b.com"
                    && order.items.len() == 1
            })
            .return_once(|order| Ok(make_receipt(&order, 200)));

        let mut res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({
                "cartItems": [{ "name": "X", "price": 100, "qty": 2 }],
                "name": "A",
                "email": "a@b.com"
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ApiResponse<ReceiptResponse> = res.take_json().await?;

        assert!(body.success);
        assert_eq!(body.message.as_deref(), Some("Order placed successfully"));

        let receipt = body.data.expect("missing data");

        assert_eq!(receipt.total, 200.0);
        assert_eq!(receipt.status, "Confirmed");
        assert!(receipt.order_id.starts_with("ORD"));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_returns_400() -> TestResult {
        let mut repo = MockCheckoutService::new();

        repo.expect_checkout()
            .once()
            .withf(|order| order.items.is_empty())
            .return_once(|_| Err(CheckoutServiceError::EmptyCart));

        let mut res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({ "cartItems": [], "name": "A", "email": "a@b.com" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ApiResponse<ReceiptResponse> = res.take_json().await?;

        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("Cart is empty"));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_blank_name_returns_400() -> TestResult {
        let mut repo = MockCheckoutService::new();

        repo.expect_checkout()
            .once()
            .return_once(|_| Err(CheckoutServiceError::MissingCustomer));

        let mut res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({
                "cartItems": [{ "name": "X", "price": 100, "qty": 2 }],
                "name": "",
                "email": "a@b.com"
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ApiResponse<ReceiptResponse> = res.take_json().await?;

        assert_eq!(body.message.as_deref(), Some("Name and email are required"));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_missing_email_field_returns_400() -> TestResult {
        let mut repo = MockCheckoutService::new();

        repo.expect_checkout().never();

        let res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({
                "cartItems": [{ "name": "X", "price": 100, "qty": 2 }],
                "name": "A"
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_unrepresentable_price_returns_400() -> TestResult {
        let mut repo = MockCheckoutService::new();

        repo.expect_checkout().never();

        let res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({
                "cartItems": [{ "name": "X", "price": 1e300, "qty": 2 }],
                "name": "A",
                "email": "a@b.com"
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
