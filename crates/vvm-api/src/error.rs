//! API error types and conversions

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use vvm_aggregator::AssembleError;
use vvm_core::BackendError;

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found
    NotFound(String),
    /// 502 Bad Gateway (upstream lookup failed)
    BadGateway(String),
    /// 503 Service Unavailable (upstream unreachable)
    ServiceUnavailable(String),
    /// 504 Gateway Timeout
    GatewayTimeout(String),
    /// 500 Internal Server Error
    Internal(String),
}

/// Standard error response format
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "bad_gateway", msg),
            ApiError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg)
            }
            ApiError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, "gateway_timeout", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        // Log errors at appropriate levels
        if status.is_server_error() {
            tracing::error!(error = error_type, %message, "API error");
        } else {
            tracing::debug!(error = error_type, %message, "API client error");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<AssembleError> for ApiError {
    fn from(err: AssembleError) -> Self {
        let message = format!("{}: {}", err, err.source);
        match err.source {
            BackendError::VehicleNotFound(_) => ApiError::NotFound(message),
            BackendError::Upstream(_) => ApiError::BadGateway(message),
            BackendError::Transport(_) => ApiError::ServiceUnavailable(message),
            BackendError::Timeout => ApiError::GatewayTimeout(message),
            BackendError::Internal(_) => ApiError::Internal(message),
        }
    }
}
