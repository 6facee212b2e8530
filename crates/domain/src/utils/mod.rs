//! Domain utilities
//!
//! Parsing and formatting helpers for calendar text, Japanese dates and
//! times, event names, and Instagram links.

pub mod datetime;
pub mod event_name;
pub mod free_text;
pub mod link;
