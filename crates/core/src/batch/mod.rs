//! Batch posting-schedule operations
//!
//! This module plans when each announcement should be posted and to which
//! channel, producing rows ready for CSV export.

pub mod service;

pub use service::{BatchPlanner, BatchRow};
