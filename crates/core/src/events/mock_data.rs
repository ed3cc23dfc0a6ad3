//! Seed data for the demo feed.
//!
//! Pure functions with no side effects: the same `today` and zone always
//! yield the same titles, dates and costs (IDs are fresh on every call).

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use super::types::Event;

/// Placeholder artwork used by every seeded event.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/200x150";

struct SeedTemplate {
    title: &'static str,
    time: &'static str,
    /// Local hour of day the event starts, matching `time`.
    start_hour: i64,
    description: &'static str,
    location: &'static str,
    estimated_cost: &'static str,
    social_fun: i32,
    day_offset: i64,
}

const SEED_TEMPLATES: [SeedTemplate; 6] = [
    SeedTemplate {
        title: "Cevin Sephora",
        time: "8:00 PM - 11:00 PM",
        start_hour: 20,
        description: "Experience the captivating sounds of Cevin Sephora in a night filled with world music rhythms and melodies.",
        location: "Central Park Stage",
        estimated_cost: "$25",
        social_fun: 4,
        day_offset: 2,
    },
    SeedTemplate {
        title: "Night Event",
        time: "9:00 PM - 1:00 AM",
        start_hour: 21,
        description: "Dance the night away with electrifying live performances by renowned artists.",
        location: "The Venue",
        estimated_cost: "$35",
        social_fun: 5,
        day_offset: 7,
    },
    SeedTemplate {
        title: "Art Exhibition: Imaginary Worlds",
        time: "10:00 AM - 6:00 PM",
        start_hour: 10,
        description: "Step into a world of imagination and creativity at the \"Imaginary Worlds\" art exhibition.",
        location: "City Art Gallery",
        estimated_cost: "$10",
        social_fun: 3,
        day_offset: 1,
    },
    SeedTemplate {
        title: "Coding Bootcamp: Introduction to Python",
        time: "10:00 AM - 5:00 PM",
        start_hour: 10,
        description: "Kickstart your coding journey with our immersive Python bootcamp.",
        location: "Tech Hub",
        estimated_cost: "$40",
        social_fun: 4,
        day_offset: 15,
    },
    SeedTemplate {
        title: "Stand-up Comedy Night",
        time: "8:00 PM - 10:00 PM",
        start_hour: 20,
        description: "Get ready for a night of laughter at our Stand-up Comedy Night.",
        location: "The Comedy Club",
        estimated_cost: "$20",
        social_fun: 5,
        day_offset: 5,
    },
    SeedTemplate {
        title: "Board Game Extravaganza",
        time: "2:00 PM - 6:00 PM",
        start_hour: 14,
        description: "Join us for an afternoon of board game fun.",
        location: "The Board Room",
        estimated_cost: "$5",
        social_fun: 4,
        day_offset: 1,
    },
];

/// Resolves a wall-clock time in `tz`.
///
/// A time skipped by a DST gap moves one hour later.
fn resolve_in<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(local + Duration::hours(1))).earliest())
        .map(|date| date.with_timezone(&Utc))
        .unwrap_or_else(|| local.and_utc())
}

impl SeedTemplate {
    fn build<Tz: TimeZone>(
        &self,
        today: NaiveDate,
        tz: &Tz,
        extra_days: i64,
        title: String,
    ) -> Event {
        let local = (today + Duration::days(self.day_offset + extra_days)).and_time(NaiveTime::MIN)
            + Duration::hours(self.start_hour);

        Event::new(title, resolve_in(local, tz))
            .with_time(self.time)
            .with_description(self.description)
            .with_location(self.location)
            .with_estimated_cost(self.estimated_cost)
            .with_social_fun(self.social_fun)
            .with_image_url(PLACEHOLDER_IMAGE_URL)
    }
}

/// Returns the six demo events, dated relative to `today`.
///
/// Start times are wall-clock hours in `tz`, so the days line up with a
/// calendar grouped in the same zone. Two events share the day after
/// `today` at different hours.
///
/// # Example
///
/// ```
/// use eventfeed_core::events::seed_events;
/// use chrono::{NaiveDate, Utc};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let events = seed_events(today, &Utc);
///
/// assert_eq!(events.len(), 6);
/// assert_eq!(events[0].title(), "Cevin Sephora");
/// ```
pub fn seed_events<Tz: TimeZone>(today: NaiveDate, tz: &Tz) -> Vec<Event> {
    SEED_TEMPLATES
        .iter()
        .map(|template| template.build(today, tz, 0, template.title.to_string()))
        .collect()
}

/// Generates `count` events by cycling through the demo templates.
///
/// Each full pass over the templates is pushed one week further out and
/// numbered in the title ("Night Event #2").
pub fn generate_seed_events<Tz: TimeZone>(today: NaiveDate, tz: &Tz, count: u32) -> Vec<Event> {
    (0..count as usize)
        .map(|i| {
            let template = &SEED_TEMPLATES[i % SEED_TEMPLATES.len()];
            let round = (i / SEED_TEMPLATES.len()) as i64;
            let title = if round == 0 {
                template.title.to_string()
            } else {
                format!("{} #{}", template.title, round + 1)
            };
            template.build(today, tz, round * 7, title)
        })
        .collect()
}
