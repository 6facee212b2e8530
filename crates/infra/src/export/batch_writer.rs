//! Batch schedule CSV writer
//!
//! Serializes planned posting rows with the fixed column order
//! `message,post_date,post_time,channel`. Messages are multi-line; the
//! writer quotes them so each row still reads back as one record.

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use kokuchi_core::BatchRow;
use kokuchi_domain::{KokuchiError, Result};

/// Export column order.
const HEADERS: [&str; 4] = ["message", "post_date", "post_time", "channel"];

/// Write batch rows as CSV to any writer.
///
/// The header row is always written, so an empty plan still produces a
/// well-formed file.
///
/// # Errors
/// Returns `KokuchiError::Io` when the underlying writer fails.
pub fn write_rows<W: Write>(writer: W, rows: &[BatchRow]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(HEADERS).map_err(csv_error)?;
    for row in rows {
        csv_writer.serialize(row).map_err(csv_error)?;
    }
    csv_writer.flush().map_err(|e| KokuchiError::Io(format!("Failed to flush export: {e}")))?;
    Ok(())
}

/// Write batch rows to a file, creating parent directories as needed.
///
/// # Errors
/// Returns `KokuchiError::Io` when the file cannot be created or written.
pub fn write_to_path(path: &Path, rows: &[BatchRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                KokuchiError::Io(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }
    }
    let file = std::fs::File::create(path)
        .map_err(|e| KokuchiError::Io(format!("Failed to create {}: {e}", path.display())))?;
    write_rows(file, rows)
}

fn csv_error(err: csv::Error) -> KokuchiError {
    KokuchiError::Io(format!("Failed to write export row: {err}"))
}
