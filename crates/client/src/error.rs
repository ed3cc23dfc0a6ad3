//! Client error types.

use eventfeed_core::source::SourceError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while rendering a view.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to load events: {0}")]
    Source(#[from] SourceError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
