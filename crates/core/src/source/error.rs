use thiserror::Error;

/// Errors that can occur while fetching events from a source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// Result type for event source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
