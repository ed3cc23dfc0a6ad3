use async_trait::async_trait;

use crate::events::Event;

use super::Result;

/// Supplies the events a session starts from.
///
/// Called once at startup; the returned order is the store's insertion order.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetches every event the source knows about.
    async fn fetch_events(&self) -> Result<Vec<Event>>;
}
