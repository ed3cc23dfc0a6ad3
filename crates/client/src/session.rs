//! Builds the session's event store.

use chrono::TimeZone;
use eventfeed_core::source::{EventSource, SeedEventSource};
use eventfeed_core::EventStore;

use crate::config::Config;
use crate::error::Result;

/// The demo source described by `config`, timed in `tz`.
pub fn seed_source<Tz: TimeZone>(config: &Config, tz: Tz) -> SeedEventSource<Tz> {
    SeedEventSource::new(config.today(), tz).with_count(config.seed_count)
}

/// Loads the store once for the whole session.
pub async fn load_store(source: &dyn EventSource) -> Result<EventStore> {
    let store = EventStore::load(source).await?;
    tracing::debug!(events = store.len(), "Session store ready");
    Ok(store)
}
