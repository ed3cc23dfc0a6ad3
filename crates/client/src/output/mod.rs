//! Output formatting functions.

pub mod json;
pub mod pretty;

pub use json::format_json;
