//! Calendar source port interfaces
//!
//! Raw events as an external calendar API delivers them, the trait an
//! event source implements, and the conversion into announcement drafts.

use chrono::{DateTime, Datelike, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use kokuchi_domain::types::{EventDraft, GenreCatalog};
use kokuchi_domain::utils::link::extract_instagram_url;
use kokuchi_domain::{parse_event_name, Result};

/// Calendar event as delivered by an external calendar API.
///
/// Unknown payload fields are ignored on deserialization, so a raw API
/// response item can be decoded directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub start: EventStart,
}

/// Start block of a remote event: timed events carry `dateTime`, all-day
/// events carry `date`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventStart {
    #[serde(rename = "dateTime", default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Trait for fetching upcoming events from a calendar source
pub trait EventSource: Send + Sync {
    /// Fetch upcoming events in start order
    fn fetch_events(&self) -> Result<Vec<RemoteEvent>>;
}

/// Convert a remote event into an announcement draft.
///
/// The summary goes through event-name parsing, the start block becomes
/// canonical `M/D` and `HH:MM` fields in the wall-clock time the calendar
/// wrote, and the description is scanned for an Instagram link. An event
/// with an empty summary stays unclassified rather than getting the
/// default event type.
#[must_use]
pub fn draft_from_remote(event: &RemoteEvent, genres: &GenreCatalog) -> EventDraft {
    let mut draft = if event.summary.is_empty() {
        EventDraft::default()
    } else {
        parse_event_name(&event.summary, genres)
    };
    if let Some((date, time)) = start_fields(&event.start) {
        draft.date = Some(date);
        draft.time = Some(time);
    }
    if let Some(description) = event.description.as_deref() {
        if let Some(url) = extract_instagram_url(description) {
            draft.instagram_url = Some(url);
        }
    }
    draft
}

/// Canonical date and time from a start block.
///
/// An unparsable `dateTime` falls back to the all-day `date` field; if
/// neither resolves the draft keeps no date at all.
fn start_fields(start: &EventStart) -> Option<(String, String)> {
    if let Some(stamp) = start.date_time.as_deref() {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(stamp) {
            return Some((
                format!("{}/{}", parsed.month(), parsed.day()),
                format!("{:02}:{:02}", parsed.hour(), parsed.minute()),
            ));
        }
    }
    let date = start.date.as_deref()?;
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some((format!("{}/{}", parsed.month(), parsed.day()), "00:00".to_string()))
}
