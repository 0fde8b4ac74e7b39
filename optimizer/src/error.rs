//! Optimizer-specific error types
//!
//! "No valid lineup" and "fewer lineups than requested" are outcomes, not
//! errors; only failures a caller must treat differently live here.

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("Player source unavailable: {message}")]
    PlayerSourceUnavailable { message: String },

    /// Reported by the command line, where no lineup means a failed run
    #[error("No valid lineup found")]
    NoValidLineup,

    #[error("Invalid request: {details}")]
    InvalidRequest { details: String },

    #[error("Configuration error: {field} = {value}")]
    ConfigurationError { field: String, value: String },

    #[error("Search task failed: {message}")]
    SearchTaskFailed { message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),
}

impl OptimizerError {
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::PlayerSourceUnavailable {
            message: message.into(),
        }
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::InvalidRequest {
            details: details.into(),
        }
    }

    /// Bad caller input, as opposed to an upstream or internal failure
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest { .. } | Self::SharedError(SharedError::InvalidRequest { .. })
        )
    }
}

pub type OptimizerResult<T> = Result<T, OptimizerError>;
