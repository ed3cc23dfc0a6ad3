//! View models derived from the event store.
//!
//! Every function here is pure: it reads the store and returns data ready
//! to be formatted.

use chrono::TimeZone;
use eventfeed_core::events::{build_day_events, DayEvents, Event, SortCriterion};
use eventfeed_core::EventStore;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::error::{ClientError, Result};

/// A pin on the map view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapPin {
    pub id: Uuid,
    pub title: String,
    pub location: String,
}

/// Where an event's artwork comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(Url),
    /// The URL is unusable; show the placeholder graphic instead.
    Placeholder,
}

/// An event as shown on the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    /// `None` when the placeholder should be shown.
    pub image: Option<String>,
}

/// One entry of the sort selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Every event as a pin, in insertion order.
pub fn map_pins(store: &EventStore) -> Vec<MapPin> {
    store
        .get_all()
        .iter()
        .map(|event| MapPin {
            id: event.id(),
            title: event.title().to_string(),
            location: event.location().to_string(),
        })
        .collect()
}

/// Events grouped per day in `tz`, earliest day first.
pub fn calendar_days<Tz: TimeZone>(store: &EventStore, tz: &Tz) -> Vec<DayEvents<Tz>> {
    build_day_events(store.get_by_date_in(tz))
}

/// Decides whether an image URL can be fetched at all.
///
/// Only absolute http(s) URLs qualify; anything else falls back to the placeholder.
pub fn image_source(raw: &str) -> ImageSource {
    match Url::parse(raw.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => ImageSource::Remote(url),
        Ok(url) => {
            tracing::debug!(scheme = url.scheme(), "Unsupported image scheme, using placeholder");
            ImageSource::Placeholder
        }
        Err(error) => {
            tracing::debug!(%error, url = raw, "Unparseable image URL, using placeholder");
            ImageSource::Placeholder
        }
    }
}

/// Builds the detail view for an event.
pub fn event_detail(event: &Event) -> EventDetail {
    let image = match image_source(event.image_url()) {
        ImageSource::Remote(url) => Some(url.to_string()),
        ImageSource::Placeholder => None,
    };
    EventDetail {
        event: event.clone(),
        image,
    }
}

/// Finds the event named by `target`: an event ID, or a 1-based position
/// in the feed sorted by `criterion`.
pub fn resolve_event(store: &EventStore, target: &str, criterion: SortCriterion) -> Result<Event> {
    let target = target.trim();

    if let Ok(id) = Uuid::parse_str(target) {
        return store
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::EventNotFound(target.to_string()));
    }

    if let Ok(position) = target.parse::<usize>() {
        return store
            .feed(criterion)
            .nth(position)
            .cloned()
            .ok_or_else(|| ClientError::EventNotFound(target.to_string()));
    }

    Err(ClientError::InvalidInput(format!(
        "expected an event ID or a feed position, got {target:?}"
    )))
}

/// The sort selector, with `current` marked.
pub fn sort_options(current: SortCriterion) -> Vec<SortOption> {
    SortCriterion::ALL
        .iter()
        .map(|criterion| SortOption {
            key: criterion.key(),
            label: criterion.label(),
            selected: *criterion == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn store() -> EventStore {
        EventStore::seeded(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), &Utc)
    }

    #[test]
    fn test_map_pins_keep_insertion_order() {
        let pins = map_pins(&store());

        assert_eq!(pins.len(), 6);
        assert_eq!(pins[0].title, "Cevin Sephora");
        assert_eq!(pins[0].location, "Central Park Stage");
        assert_eq!(pins[5].title, "Board Game Extravaganza");
    }

    #[test]
    fn test_calendar_days_in_utc() {
        let days = calendar_days(&store(), &Utc);

        assert_eq!(days.len(), 5);
        assert_eq!(days[0].day.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 16).unwrap());
        assert_eq!(days[0].event_count(), 2);
    }

    #[test]
    fn test_calendar_days_east_of_utc() {
        let tz = FixedOffset::east_opt(11 * 3600).unwrap();
        let store = EventStore::seeded(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), &tz);

        let days = calendar_days(&store, &tz);

        assert_eq!(days.len(), 5);
        assert_eq!(days[0].day, tz.with_ymd_and_hms(2024, 6, 16, 0, 0, 0).unwrap());
        assert_eq!(days[0].event_count(), 2);
        assert_eq!(days[1].events[0].title(), "Cevin Sephora");
    }

    #[test]
    fn test_image_source() {
        assert!(matches!(
            image_source("https://via.placeholder.com/200x150"),
            ImageSource::Remote(_)
        ));
        assert_eq!(image_source("not a url"), ImageSource::Placeholder);
        assert_eq!(image_source(""), ImageSource::Placeholder);
        assert_eq!(image_source("ftp://example.com/a.png"), ImageSource::Placeholder);
    }

    #[test]
    fn test_event_detail_placeholder() {
        let event = Event::new("Broken art", Utc::now()).with_image_url("::nope::");
        let detail = event_detail(&event);

        assert_eq!(detail.image, None);
        assert_eq!(detail.event, event);
    }

    #[test]
    fn test_resolve_event_by_id() {
        let store = store();
        let id = store.get_all()[2].id();

        let event = resolve_event(&store, &id.to_string(), SortCriterion::Date).unwrap();

        assert_eq!(event.id(), id);
    }

    #[test]
    fn test_resolve_event_by_position() {
        let store = store();

        let cheapest = resolve_event(&store, "1", SortCriterion::Cost).unwrap();
        let earliest = resolve_event(&store, "1", SortCriterion::Date).unwrap();

        assert_eq!(cheapest.title(), "Board Game Extravaganza");
        assert_eq!(earliest.title(), "Art Exhibition: Imaginary Worlds");
    }

    #[test]
    fn test_resolve_event_errors() {
        let store = store();

        assert!(matches!(
            resolve_event(&store, "0", SortCriterion::Date),
            Err(ClientError::EventNotFound(_))
        ));
        assert!(matches!(
            resolve_event(&store, &Uuid::nil().to_string(), SortCriterion::Date),
            Err(ClientError::EventNotFound(_))
        ));
        assert!(matches!(
            resolve_event(&store, "night", SortCriterion::Date),
            Err(ClientError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_sort_options_mark_current() {
        let options = sort_options(SortCriterion::Cost);

        assert_eq!(options.len(), 3);
        assert_eq!(options[2].label, "Fun Score");
        assert!(options[1].selected);
        assert!(!options[0].selected && !options[2].selected);
    }
}
