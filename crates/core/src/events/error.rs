use thiserror::Error;

/// Errors that can occur when validating an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
}

/// Returned when a string names no known sort criterion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown sort criterion: {0} (expected date, cost or fun-score)")]
pub struct ParseSortCriterionError(pub String);
