//! # Kokuchi Domain
//!
//! Business domain types and parsing utilities for Kokuchi.
//!
//! This crate contains:
//! - The event draft record and its field enumeration
//! - The event type enumeration (category x phase) with its policy rules
//! - The genre marker and fixed Zoom catalogs
//! - Total parsers for event names and pasted calendar text
//!
//! ## Architecture
//! - No dependencies on other Kokuchi crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
// Re-export parser entry points
pub use utils::event_name::parse_event_name;
pub use utils::free_text::parse_calendar_text;
