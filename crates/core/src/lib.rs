//! # Kokuchi Core
//!
//! Pure announcement-generation logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Template-driven announcement rendering and validation
//! - Monthly overview assembly
//! - Posting-schedule planning for batch export
//! - Port interfaces (traits) for external calendar sources
//!
//! ## Architecture Principles
//! - Only depends on `kokuchi-domain`
//! - No filesystem, HTTP, or terminal code
//! - External event sources via traits
//! - Pure, testable business logic

pub mod announce;
pub mod batch;
pub mod overview;

// Infrastructure ports
pub mod calendar_ports;

// Re-export specific items to avoid ambiguity
pub use announce::{AnnouncementEngine, TemplateCatalog, ValidationReport};
pub use batch::{BatchPlanner, BatchRow};
pub use calendar_ports::{draft_from_remote, EventSource, EventStart, RemoteEvent};
pub use overview::MonthlyOverviewBuilder;
