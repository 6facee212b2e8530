//! JSON file event source
//!
//! Reads calendar events from a JSON file, either a bare array of events
//! or a calendar-API list response with an `items` array. Keeping the
//! fetch step outside the process means the pipeline itself needs no
//! network access or credentials.

use std::path::PathBuf;

use serde::Deserialize;

use kokuchi_core::{EventSource, RemoteEvent};
use kokuchi_domain::{KokuchiError, Result};

/// Event source backed by a JSON file of fetched events.
pub struct FileEventSource {
    path: PathBuf,
}

impl FileEventSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventSource for FileEventSource {
    fn fetch_events(&self) -> Result<Vec<RemoteEvent>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            KokuchiError::Io(format!("Failed to read events file {}: {e}", self.path.display()))
        })?;
        parse_events(&raw)
    }
}

/// Decode an events payload.
///
/// Accepts either a bare JSON array of events or an object carrying the
/// events under an `items` key, the shape calendar list endpoints return.
///
/// # Errors
/// Returns `KokuchiError::InvalidInput` for malformed JSON.
pub fn parse_events(raw: &str) -> Result<Vec<RemoteEvent>> {
    #[derive(Deserialize)]
    struct ListResponse {
        #[serde(default)]
        items: Vec<RemoteEvent>,
    }

    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| KokuchiError::InvalidInput(format!("Invalid events JSON: {e}")))?;
    if value.is_array() {
        serde_json::from_value(value)
            .map_err(|e| KokuchiError::InvalidInput(format!("Invalid events JSON: {e}")))
    } else {
        let list: ListResponse = serde_json::from_value(value)
            .map_err(|e| KokuchiError::InvalidInput(format!("Invalid events JSON: {e}")))?;
        Ok(list.items)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const LIST_PAYLOAD: &str = r#"{
        "kind": "calendar#events",
        "items": [
            {
                "id": "a1",
                "summary": "【生徒対談】ゲスト回",
                "start": {"dateTime": "2026-03-10T21:00:00+09:00"}
            },
            {
                "id": "a2",
                "summary": "【オン会】",
                "start": {"date": "2026-03-15"}
            }
        ]
    }"#;

    #[test]
    fn list_response_yields_items() {
        let events = parse_events(LIST_PAYLOAD).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "a1");
        assert_eq!(events[1].start.date.as_deref(), Some("2026-03-15"));
    }

    #[test]
    fn bare_array_is_accepted() {
        let events = parse_events(r#"[{"id": "x", "summary": "【講師対談】"}]"#).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, "【講師対談】");
    }

    #[test]
    fn object_without_items_is_an_empty_feed() {
        let events = parse_events(r#"{"kind": "calendar#events"}"#).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn malformed_json_is_invalid_input() {
        let result = parse_events("{not json");
        assert!(matches!(result, Err(KokuchiError::InvalidInput(_))));
    }

    #[test]
    fn source_reads_events_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(LIST_PAYLOAD.as_bytes()).unwrap();

        let source = FileEventSource::new(&path);
        let events = source.fetch_events().unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = FileEventSource::new("/nonexistent/events.json");
        assert!(matches!(source.fetch_events(), Err(KokuchiError::Io(_))));
    }
}
