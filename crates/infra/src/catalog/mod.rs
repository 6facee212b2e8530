//! Template catalog sources
//!
//! Loads per-event-type announcement templates from tabular files.

pub mod template_source;

// Re-export commonly used items
pub use template_source::{load_catalog, parse_catalog, probe_template_paths, resolve_catalog};
