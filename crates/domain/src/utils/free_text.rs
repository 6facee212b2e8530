//! Calendar free-text parser.
//!
//! Takes a pasted calendar entry and pulls out whatever fields its lines
//! expose. Scanning is first-line-wins per field and never fails; lines no
//! detector recognizes are ignored.

use crate::types::{EventDraft, GenreCatalog};
use crate::utils::datetime::{canonicalize_date, canonicalize_time};
use crate::utils::event_name::parse_event_name;
use crate::utils::link::{extract_instagram_url, strip_url_tail};

/// Parse a pasted calendar entry into a partial draft.
///
/// The event-name line (full-width brackets) feeds [`parse_event_name`];
/// date, time and Instagram link each come from the first line their
/// detector accepts. Zoom fields are never read from the text, the fixed
/// metadata catalog supplies them later.
#[must_use]
pub fn parse_calendar_text(text: &str, genres: &GenreCatalog) -> EventDraft {
    let lines: Vec<&str> =
        text.trim().lines().map(str::trim).filter(|line| !line.is_empty()).collect();

    let mut draft = lines
        .iter()
        .find(|line| line.contains('【') && line.contains('】'))
        .map_or_else(EventDraft::default, |line| parse_event_name(line, genres));

    if let Some(line) = lines.iter().find(|line| line.contains('月') && line.contains('日')) {
        draft.date = Some(canonicalize_date(line));
    }

    if let Some(line) = lines.iter().find(|line| is_time_line(line)) {
        draft.time = Some(canonicalize_time(line));
    }

    if let Some(line) = lines.iter().find(|line| line.to_lowercase().contains("instagram.com")) {
        draft.instagram_url = instagram_url_from_line(line);
    }

    draft
}

fn is_time_line(line: &str) -> bool {
    line.contains("午前") || line.contains("午後") || (line.contains(':') && !line.contains('時'))
}

fn instagram_url_from_line(line: &str) -> Option<String> {
    extract_instagram_url(line)
        .or_else(|| line.starts_with("http").then(|| strip_url_tail(line)))
}
