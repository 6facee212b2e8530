//! # Kokuchi Infrastructure
//!
//! Infrastructure implementations of core ports and external sources.
//!
//! This crate contains:
//! - Configuration loading (environment, TOML/JSON files)
//! - Template catalog loading from CSV
//! - Batch schedule export to CSV
//! - Calendar feed sources (JSON event files)
//!
//! ## Architecture
//! - Implements traits defined in `kokuchi-core`
//! - Depends on `kokuchi-domain` and `kokuchi-core`
//! - Contains all "impure" code (file I/O, environment access)

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod export;

// Re-export commonly used items
pub use calendar::FileEventSource;
pub use catalog::{load_catalog, parse_catalog, resolve_catalog};
pub use config::{load, load_from_file, probe_config_paths};
pub use export::{write_rows, write_to_path};
