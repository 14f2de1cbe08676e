//! Service Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors raised while reading startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but did not parse as a TCP port.
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Errors surfaced to HTTP clients by the solve endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Both the agent and the fallback path failed.
    #[error("Agent call failed: {0}")]
    AgentFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::AgentFailed(_) => StatusCode::BAD_GATEWAY,
        };
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
