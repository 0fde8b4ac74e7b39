//! WebServer-specific error types
//!
//! Every error renders as `{ "error": "<message>" }` with a status code that
//! tells the browser which kind of failure it is looking at.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use optimizer::OptimizerError;
use shared::{process_error, process_warn, ErrorResponse, ProcessId, SharedError};

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No valid lineup found")]
    NoValidLineup,

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("{0}")]
    Engine(#[from] OptimizerError),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoValidLineup | Self::Engine(OptimizerError::NoValidLineup) => StatusCode::NOT_FOUND,
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            Self::InvalidRequest { .. } | Self::SharedError(SharedError::InvalidRequest { .. }) => {
                StatusCode::BAD_REQUEST
            }
            Self::Engine(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Engine(OptimizerError::PlayerSourceUnavailable { .. }) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            process_error!(ProcessId::current(), "❌ Request failed with {}: {}", status, self);
        } else if status.is_server_error() {
            process_warn!(ProcessId::current(), "⚠️ Request failed with {}: {}", status, self);
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
