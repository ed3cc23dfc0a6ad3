//! Sources that need no I/O.

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone};

use crate::events::{generate_seed_events, seed_events, Event};

use super::{EventSource, Result};

/// Serves the demo events, dated relative to `today` on the wall clock of `tz`.
#[derive(Debug, Clone)]
pub struct SeedEventSource<Tz: TimeZone> {
    today: NaiveDate,
    tz: Tz,
    count: Option<u32>,
}

impl<Tz: TimeZone> SeedEventSource<Tz> {
    pub fn new(today: NaiveDate, tz: Tz) -> Self {
        Self {
            today,
            tz,
            count: None,
        }
    }

    /// Serves `count` events cycled from the demo templates instead of the six originals.
    pub fn with_count(mut self, count: Option<u32>) -> Self {
        self.count = count;
        self
    }
}

#[async_trait]
impl<Tz> EventSource for SeedEventSource<Tz>
where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Send + Sync,
{
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        Ok(match self.count {
            Some(count) => generate_seed_events(self.today, &self.tz, count),
            None => seed_events(self.today, &self.tz),
        })
    }
}

/// Serves a fixed list of events.
#[derive(Debug, Clone, Default)]
pub struct StaticEventSource {
    events: Vec<Event>,
}

impl StaticEventSource {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl EventSource for StaticEventSource {
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        Ok(self.events.clone())
    }
}
