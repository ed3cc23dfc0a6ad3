//! eventfeed_client - terminal views over the eventfeed core.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod session;
pub mod views;

pub use config::Config;
pub use error::{ClientError, Result};
