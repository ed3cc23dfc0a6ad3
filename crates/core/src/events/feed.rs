use super::sorting::sort_events;
use super::types::{Event, SortCriterion};

/// Feed state: the selected criterion and the events as displayed.
///
/// The displayed order is always recomputed from the events as first
/// supplied, so switching back to a criterion restores its exact order.
#[derive(Debug, Clone)]
pub struct FeedView {
    source: Vec<Event>,
    criterion: SortCriterion,
    displayed: Vec<Event>,
}

impl FeedView {
    /// Creates a feed sorted by the default criterion.
    pub fn new(events: Vec<Event>) -> Self {
        Self::with_criterion(events, SortCriterion::default())
    }

    /// Creates a feed sorted by `criterion`.
    pub fn with_criterion(events: Vec<Event>, criterion: SortCriterion) -> Self {
        let displayed = sort_events(&events, criterion);
        Self {
            source: events,
            criterion,
            displayed,
        }
    }

    /// Selects a new criterion and re-sorts. Returns false if it was already selected.
    pub fn set_criterion(&mut self, criterion: SortCriterion) -> bool {
        if self.criterion == criterion {
            return false;
        }
        self.criterion = criterion;
        self.displayed = sort_events(&self.source, criterion);
        true
    }

    pub fn criterion(&self) -> SortCriterion {
        self.criterion
    }

    /// Events in display order.
    pub fn events(&self) -> &[Event] {
        &self.displayed
    }

    /// Returns the event at a 1-based display position.
    pub fn nth(&self, position: usize) -> Option<&Event> {
        position
            .checked_sub(1)
            .and_then(|index| self.displayed.get(index))
    }
}
