use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ParseSortCriterionError;

/// A local happening (concert, exhibition, class) shown on the map, the
/// calendar and the feed.
///
/// Fields are private: once built, an event never changes. Use the `with_*`
/// builders while constructing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    id: Uuid,
    title: String,
    /// Free-form display string, e.g. "8:00 PM - 11:00 PM".
    time: String,
    description: String,
    location: String,
    /// Free-form, may embed currency symbols ("$25", "Free").
    estimated_cost: String,
    /// Expected to be 1 to 5, not enforced.
    social_fun: i32,
    image_url: String,
    date: DateTime<Utc>,
}

impl Event {
    /// Creates a new event with a fresh ID and empty display fields.
    pub fn new(title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            time: String::new(),
            description: String::new(),
            location: String::new(),
            estimated_cost: String::new(),
            social_fun: 0,
            image_url: String::new(),
            date,
        }
    }

    /// Sets the display time range.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the estimated cost string.
    pub fn with_estimated_cost(mut self, estimated_cost: impl Into<String>) -> Self {
        self.estimated_cost = estimated_cost.into();
        self
    }

    /// Sets the social fun score.
    pub fn with_social_fun(mut self, social_fun: i32) -> Self {
        self.social_fun = social_fun;
        self
    }

    /// Sets the image URL.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn estimated_cost(&self) -> &str {
        &self.estimated_cost
    }

    pub fn social_fun(&self) -> i32 {
        self.social_fun
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Ordering applied to the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortCriterion {
    /// Earliest date first.
    #[default]
    Date,
    /// Cheapest first, by [`cost_score`](super::cost_score).
    Cost,
    /// Lowest social fun score first.
    FunScore,
}

impl SortCriterion {
    /// All criteria, in the order the selector shows them.
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::Date,
        SortCriterion::Cost,
        SortCriterion::FunScore,
    ];

    /// Returns the label shown in the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortCriterion::Date => "Date",
            SortCriterion::Cost => "Cost",
            SortCriterion::FunScore => "Fun Score",
        }
    }

    /// Returns the kebab-case key used on the command line and in JSON.
    pub fn key(&self) -> &'static str {
        match self {
            SortCriterion::Date => "date",
            SortCriterion::Cost => "cost",
            SortCriterion::FunScore => "fun-score",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortCriterion {
    type Err = ParseSortCriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortCriterion::Date),
            "cost" => Ok(SortCriterion::Cost),
            "fun-score" | "fun_score" | "funscore" | "fun score" => Ok(SortCriterion::FunScore),
            _ => Err(ParseSortCriterionError(s.to_string())),
        }
    }
}

/// Events falling on a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "Tz::Offset: fmt::Display"))]
pub struct DayEvents<Tz: TimeZone> {
    /// Midnight of the day, in the grouping time zone.
    pub day: DateTime<Tz>,
    /// Events of the day, in their original order.
    pub events: Vec<Event>,
}

impl<Tz: TimeZone> DayEvents<Tz> {
    /// Creates a new DayEvents with the given day and events.
    pub fn new(day: DateTime<Tz>, events: Vec<Event>) -> Self {
        Self { day, events }
    }

    /// Returns true if this day has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the number of events for this day.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}
