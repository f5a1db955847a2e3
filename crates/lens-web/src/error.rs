//! API-layer error type

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message for a blank or missing ticker
pub const INPUT_FAILURE_MESSAGE: &str = "Please enter a stock ticker";

/// Generic message for any upstream failure; the cause is logged, not shown
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to analyze stock. Please try again.";

/// API-layer error type
#[derive(Debug)]
pub enum ApiError {
    /// 400 - Bad request (invalid input)
    BadRequest(String),

    /// 500 - Upstream analysis failure
    Upstream(String),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
