mod error;
mod feed;
mod mock_data;
mod operations;
mod sorting;
mod types;

pub use error::{EventError, ParseSortCriterionError};
pub use feed::FeedView;
pub use mock_data::{generate_seed_events, seed_events, PLACEHOLDER_IMAGE_URL};
pub use operations::{find_event, validate_event};
pub use sorting::{
    build_day_events, cost_score, group_events_by_day, sort_events, sort_events_in_place,
    start_of_day,
};
pub use types::{DayEvents, Event, SortCriterion};
