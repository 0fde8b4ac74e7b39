//! Shared error types for the lineup builder

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid request: {details}")]
    InvalidRequest { details: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
