//! Batch schedule exports
//!
//! Writes planned posting rows to CSV for the scheduling spreadsheet.

pub mod batch_writer;

// Re-export commonly used items
pub use batch_writer::{write_rows, write_to_path};
