use uuid::Uuid;

use super::error::EventError;
use super::types::Event;

const MAX_TITLE_LEN: usize = 200;

/// Finds an event by its ID.
pub fn find_event(events: &[Event], id: Uuid) -> Option<&Event> {
    events.iter().find(|event| event.id() == id)
}

/// Validates an event before it is admitted to a store.
/// The social fun score is deliberately left unchecked.
pub fn validate_event(event: &Event) -> Result<(), EventError> {
    if event.title().trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if event.title().chars().count() > MAX_TITLE_LEN {
        return Err(EventError::TitleTooLong);
    }
    Ok(())
}
