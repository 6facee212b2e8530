//! Calendar feed sources
//!
//! Event sources feeding the announcement pipeline from outside the
//! process, currently a JSON file of fetched calendar events.

pub mod file_source;

// Re-export commonly used items
pub use file_source::{parse_events, FileEventSource};
