use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

use super::types::{DayEvents, Event, SortCriterion};

/// Derives a numeric score from a free-form cost string.
///
/// Every ASCII digit is kept, in order, and the result is read as an integer.
/// Strings without digits (or with more digits than fit in a `u64`) score 0.
/// A range such as "$10-20" reads as 1020.
pub fn cost_score(estimated_cost: &str) -> u64 {
    let digits: String = estimated_cost
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Sorts events in place by the given criterion, ascending.
/// Equal keys keep their relative order.
pub fn sort_events_in_place(events: &mut [Event], criterion: SortCriterion) {
    match criterion {
        SortCriterion::Date => events.sort_by_key(|event| event.date()),
        SortCriterion::Cost => events.sort_by_cached_key(|event| cost_score(event.estimated_cost())),
        SortCriterion::FunScore => events.sort_by_key(|event| event.social_fun()),
    }
}

/// Returns a copy of `events` ordered by the given criterion.
pub fn sort_events(events: &[Event], criterion: SortCriterion) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sort_events_in_place(&mut sorted, criterion);
    tracing::debug!(count = sorted.len(), criterion = criterion.key(), "Sorted events");
    sorted
}

/// Returns midnight of the day `date` falls on, as seen from `tz`.
///
/// If a DST transition skips midnight, the first valid quarter hour of that
/// day is returned instead.
pub fn start_of_day<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz) -> DateTime<Tz> {
    let local = date.with_timezone(tz);
    let midnight = local.date_naive().and_time(NaiveTime::MIN);

    (0..96)
        .map(|quarter| midnight + Duration::minutes(15 * quarter))
        .find_map(|candidate| tz.from_local_datetime(&candidate).earliest())
        .unwrap_or(local)
}

/// Groups events by the local day they fall on.
///
/// Keys are the midnight of each day; events keep their input order inside a day.
pub fn group_events_by_day<Tz: TimeZone>(
    events: &[Event],
    tz: &Tz,
) -> BTreeMap<DateTime<Tz>, Vec<Event>> {
    let mut grouped: BTreeMap<DateTime<Tz>, Vec<Event>> = BTreeMap::new();

    for event in events {
        grouped
            .entry(start_of_day(&event.date(), tz))
            .or_default()
            .push(event.clone());
    }

    tracing::debug!(
        events = events.len(),
        days = grouped.len(),
        "Grouped events by day"
    );
    grouped
}

/// Turns a day grouping into one [`DayEvents`] row per day, earliest day first.
pub fn build_day_events<Tz: TimeZone>(
    grouped: BTreeMap<DateTime<Tz>, Vec<Event>>,
) -> Vec<DayEvents<Tz>> {
    grouped
        .into_iter()
        .map(|(day, events)| DayEvents::new(day, events))
        .collect()
}
