//! Errors

use shopfront_app::domain::checkout::CheckoutServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: CheckoutServiceError) -> ApiError {
    match error {
        CheckoutServiceError::EmptyCart => ApiError::bad_request("Cart is empty"),
        CheckoutServiceError::MissingCustomer => {
            ApiError::bad_request("Name and email are required")
        }
    }
}
