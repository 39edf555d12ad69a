//! Errors

use shopfront_app::domain::cart::CartServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: CartServiceError) -> ApiError {
    match error {
        CartServiceError::InvalidProduct => {
            ApiError::bad_request("Product ID and quantity are required")
        }
        CartServiceError::InvalidQuantity => {
            ApiError::bad_request("Quantity must be greater than 0")
        }
        CartServiceError::ProductNotFound => ApiError::not_found("Product not found"),
        CartServiceError::LineNotFound => ApiError::not_found("Item not found in cart"),
    }
}
