mod error;
mod seed;
mod traits;

pub use error::{Result, SourceError};
pub use seed::{SeedEventSource, StaticEventSource};
pub use traits::EventSource;
