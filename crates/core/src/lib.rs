//! eventfeed_core - functional core for the eventfeed project.
//!
//! Holds the event model, the pure sorting and day-grouping functions, the
//! seed data, and the [`store::EventStore`] that the views read from.

pub mod events;
pub mod source;
pub mod store;

pub use store::EventStore;
