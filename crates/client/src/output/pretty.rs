//! Pretty output formatting.

use std::fmt::Display;

use chrono::TimeZone;
use eventfeed_core::events::{DayEvents, Event, SortCriterion};

use crate::views::{EventDetail, MapPin, SortOption};

/// Format map pins for display.
pub fn format_pins(pins: &[MapPin]) -> String {
    if pins.is_empty() {
        return "No events on the map.".to_string();
    }
    let mut output = format!("MAP ({})\n", pins.len());
    output.push_str(&"-".repeat(40));
    for pin in pins {
        output.push_str(&format!("\n* {} @ {}", pin.title, pin.location));
    }
    output
}

/// Format a feed card: date badge (in `tz`), title and time.
pub fn format_card<Tz>(position: usize, event: &Event, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{:>2}. [{}] {}\n    {} | {} | Fun {}/5",
        position,
        event.date().with_timezone(tz).format("%b %-d"),
        event.title(),
        event.time(),
        event.estimated_cost(),
        event.social_fun()
    )
}

/// Format the sorted feed for display, with dates in `tz`.
pub fn format_feed<Tz>(events: &[Event], criterion: SortCriterion, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({}) sorted by {}\n", events.len(), criterion);
    output.push_str(&"-".repeat(40));
    for (index, event) in events.iter().enumerate() {
        output.push_str(&format!("\n{}", format_card(index + 1, event, tz)));
    }
    output
}

/// Format calendar days for display.
pub fn format_days<Tz>(days: &[DayEvents<Tz>]) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if days.is_empty() {
        return "No events scheduled.".to_string();
    }
    let mut output = format!("CALENDAR ({} days)\n", days.len());
    output.push_str(&"-".repeat(40));
    for day in days {
        output.push_str(&format!(
            "\n{} ({})",
            day.day.format("%A, %B %-d %Y"),
            day.event_count()
        ));
        for event in &day.events {
            output.push_str(&format!("\n  - {} ({})", event.title(), event.time()));
        }
    }
    output
}

/// Format the detail view of an event, with its date in `tz`.
pub fn format_detail<Tz>(detail: &EventDetail, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let event = &detail.event;
    let image = detail.image.as_deref().unwrap_or("[placeholder]");
    format!(
        "{}\n  ID: {}\n  When: {} ({})\n\n  {}\n\n  Location: {}\n  Estimated Cost: {}\n  Fun Score: {}/5\n  Image: {}",
        event.title(),
        event.id(),
        event.date().with_timezone(tz).format("%Y-%m-%d"),
        event.time(),
        event.description(),
        event.location(),
        event.estimated_cost(),
        event.social_fun(),
        image
    )
}

/// Format the sort selector.
pub fn format_sort_options(options: &[SortOption]) -> String {
    let mut output = String::from("SORT BY");
    for option in options {
        let marker = if option.selected { "*" } else { " " };
        output.push_str(&format!("\n {} {} ({})", marker, option.label, option.key));
    }
    output
}
