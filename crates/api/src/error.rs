//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::ParseIdError;
use domain::CartError;

/// API-level error type that maps to HTTP responses.
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Cart operation error.
    Cart(CartError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Cart(err) => cart_error_to_response(err),
        };

        metrics::counter!("api_errors_total", "status" => status.as_u16().to_string()).increment(1);

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn cart_error_to_response(err: CartError) -> (StatusCode, String) {
    match &err {
        CartError::CartNotFound(_) => (StatusCode::NOT_FOUND, "Cart not found".to_string()),
        CartError::ProductNotFound(_) => (StatusCode::NOT_FOUND, "Product not found".to_string()),
        CartError::ItemNotFound { .. } => {
            (StatusCode::NOT_FOUND, "Item not found in cart".to_string())
        }
        CartError::InvalidQuantity { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
    }
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        ApiError::Cart(err)
    }
}

impl From<ParseIdError> for ApiError {
    fn from(err: ParseIdError) -> Self {
        ApiError::BadRequest(format!("Invalid {}", err.kind))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected request payload");
        ApiError::BadRequest("Invalid request payload".to_string())
    }
}
