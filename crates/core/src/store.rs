//! The session's canonical event collection.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use uuid::Uuid;

use crate::events::{
    find_event, group_events_by_day, seed_events, sort_events, validate_event, Event, FeedView,
    SortCriterion,
};
use crate::source::{EventSource, Result};

/// Holds the events for a session in insertion order.
///
/// Built once at startup and handed to each view by reference; nothing
/// mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Wraps events that are already known to be valid and uniquely identified.
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Creates a store holding the demo events for `today`, timed in `tz`.
    pub fn seeded<Tz: TimeZone>(today: NaiveDate, tz: &Tz) -> Self {
        Self::new(seed_events(today, tz))
    }

    /// Fetches events from `source`.
    ///
    /// Events that fail validation, or reuse an ID already loaded, are skipped.
    pub async fn load(source: &dyn EventSource) -> Result<Self> {
        let fetched = source.fetch_events().await?;
        let fetched_count = fetched.len();

        let mut seen = HashSet::with_capacity(fetched_count);
        let mut events = Vec::with_capacity(fetched_count);
        for event in fetched {
            if let Err(error) = validate_event(&event) {
                tracing::warn!(id = %event.id(), %error, "Skipping invalid event");
                continue;
            }
            if !seen.insert(event.id()) {
                tracing::warn!(id = %event.id(), "Skipping duplicate event");
                continue;
            }
            events.push(event);
        }

        tracing::info!(
            loaded = events.len(),
            skipped = fetched_count - events.len(),
            "Loaded events"
        );
        Ok(Self { events })
    }

    /// All events, in insertion order.
    pub fn get_all(&self) -> &[Event] {
        &self.events
    }

    /// Events grouped by the local calendar day they fall on.
    pub fn get_by_date(&self) -> BTreeMap<DateTime<Local>, Vec<Event>> {
        self.get_by_date_in(&Local)
    }

    /// Events grouped by calendar day in `tz`.
    pub fn get_by_date_in<Tz: TimeZone>(&self, tz: &Tz) -> BTreeMap<DateTime<Tz>, Vec<Event>> {
        group_events_by_day(&self.events, tz)
    }

    /// Looks up an event by ID.
    pub fn get(&self, id: Uuid) -> Option<&Event> {
        find_event(&self.events, id)
    }

    /// Returns a sorted copy of all events.
    pub fn sorted(&self, criterion: SortCriterion) -> Vec<Event> {
        sort_events(&self.events, criterion)
    }

    /// Builds feed state over all events.
    pub fn feed(&self, criterion: SortCriterion) -> FeedView {
        FeedView::with_criterion(self.events.clone(), criterion)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
