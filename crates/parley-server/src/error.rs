//! HTTP error translation

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use parley_core::ParleyError;
use serde::Serialize;

/// Error surfaced to HTTP callers
///
/// Wraps a core error; the response body carries the outward-facing
/// message only, while the full error is logged server-side.
#[derive(Debug)]
pub struct ApiError(pub ParleyError);

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl From<ParleyError> for ApiError {
    fn from(err: ParleyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let error_type = match &self.0 {
            ParleyError::InvalidInput { .. } => {
                tracing::warn!("Bad request: {}", self.0);
                "BadRequest"
            }
            ParleyError::Config { .. } => {
                tracing::error!("Configuration error: {}", self.0);
                "ConfigurationError"
            }
            _ => {
                tracing::error!("Upstream failure: {}", self.0);
                "UpstreamError"
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.0.user_message(),
        });

        (status, body).into_response()
    }
}
