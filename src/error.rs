//! Error types for the gateway
//!
//! Provides unified error handling using thiserror.
//!
//! Cache misses are deliberately absent from this taxonomy: a miss is
//! a normal outcome of the request flow, and a broken cache degrades
//! to "as if empty" rather than surfacing here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Gateway Error Enum ==
/// Unified error type for the gateway request path.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Upstream Ollama service is down or failed its health probe
    #[error("Ollama service is not available")]
    UpstreamUnavailable,

    /// Upstream call exceeded the configured timeout
    #[error("Request to Ollama timed out")]
    UpstreamTimeout,

    /// Upstream call failed for another reason
    #[error("Error generating text: {0}")]
    Upstream(String),

    /// Upstream answered but produced no completion text
    #[error("No response generated from Ollama")]
    EmptyCompletion,

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::UpstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::EmptyCompletion => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;
