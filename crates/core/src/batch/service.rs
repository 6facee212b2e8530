//! Batch schedule planner - core business logic

use chrono::{Datelike, Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::warn;

use kokuchi_domain::constants::{
    ADVANCE_POST_TIME, CHANNEL_DEFAULT, SKIP_MISSING_FIELDS, SKIP_MISSING_TEMPLATE,
    STARTING_SOON_LEAD_MINUTES,
};
use kokuchi_domain::types::{EventDraft, EventPhase, EventType};
use kokuchi_domain::utils::datetime::resolve_month_day;

use crate::announce::AnnouncementEngine;

/// One planned posting: the message plus when and where to post it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRow {
    pub message: String,
    pub post_date: String,
    pub post_time: String,
    pub channel: String,
}

/// Plans posting schedules for a batch of event drafts.
///
/// Advance notices post the evening before the event and spawn a second,
/// starting-soon row for the event itself. Starting-soon rows post a few
/// minutes before start, rolling into the previous day across midnight.
/// Drafts that fail validation or have no template still produce a row,
/// with a placeholder message, so the export keeps one line per posting.
pub struct BatchPlanner<'a> {
    engine: &'a AnnouncementEngine,
    year: i32,
}

impl<'a> BatchPlanner<'a> {
    /// Create a planner over `engine`, anchored to `year` for date math.
    #[must_use]
    pub fn new(engine: &'a AnnouncementEngine, year: i32) -> Self {
        Self { engine, year }
    }

    /// Plan posting rows for all drafts, in input order.
    #[must_use]
    pub fn plan(&self, drafts: &[EventDraft]) -> Vec<BatchRow> {
        let mut rows = Vec::new();
        for draft in drafts {
            rows.push(self.row_for(draft));
            if draft.event_type.map_or(false, |event_type| event_type.is_advance_notice()) {
                let mut follow_up = draft.clone();
                follow_up.event_type =
                    follow_up.event_type.map(|event_type| event_type.with_phase(EventPhase::StartingSoon));
                rows.push(self.row_for(&follow_up));
            }
        }
        rows
    }

    fn row_for(&self, draft: &EventDraft) -> BatchRow {
        let mut working = draft.clone();
        let report = self.engine.validate(&working);
        let message = if report.is_valid() {
            match self.engine.render(&mut working) {
                Some(message) => message,
                None => {
                    warn!(
                        event_type = ?working.event_type,
                        "no template registered; emitting placeholder row"
                    );
                    SKIP_MISSING_TEMPLATE.to_string()
                }
            }
        } else {
            warn!(
                event_type = ?working.event_type,
                missing = report.errors().len(),
                "draft failed validation; emitting placeholder row"
            );
            SKIP_MISSING_FIELDS.to_string()
        };
        let (post_date, post_time) = self.schedule(&working);
        let channel =
            working.event_type.map_or(CHANNEL_DEFAULT, |event_type| event_type.channel());
        BatchRow { message, post_date, post_time, channel: channel.to_string() }
    }

    /// Posting date and time for a draft; empty strings when the event's
    /// own date or time cannot be resolved.
    fn schedule(&self, draft: &EventDraft) -> (String, String) {
        let Some(event_type) = draft.event_type else {
            return (String::new(), String::new());
        };
        let date = draft.date.as_deref().unwrap_or("");
        match event_type.phase {
            EventPhase::AdvanceNotice | EventPhase::Graduates => self.evening_before(date),
            EventPhase::StartingSoon => {
                self.minutes_before(date, draft.time.as_deref().unwrap_or(""))
            }
        }
    }

    fn evening_before(&self, date: &str) -> (String, String) {
        let Some(resolved) = resolve_month_day(date, self.year) else {
            return (String::new(), String::new());
        };
        let previous = resolved - Duration::days(1);
        (format!("{}/{}", previous.month(), previous.day()), ADVANCE_POST_TIME.to_string())
    }

    fn minutes_before(&self, date: &str, time: &str) -> (String, String) {
        let Some(resolved) = resolve_month_day(date, self.year) else {
            return (String::new(), String::new());
        };
        let Some(clock) = strict_clock(time) else {
            return (String::new(), String::new());
        };
        let moment = resolved.and_time(clock) - Duration::minutes(STARTING_SOON_LEAD_MINUTES);
        (
            format!("{}/{}", moment.month(), moment.day()),
            format!("{:02}:{:02}", moment.hour(), moment.minute()),
        )
    }
}

/// Parse a strict `HH:MM` clock; scheduling needs a real time, so unlike
/// sorting there is no midnight fallback for free-form text.
fn strict_clock(time: &str) -> Option<NaiveTime> {
    let (hour, minute) = time.trim().split_once(':')?;
    NaiveTime::from_hms_opt(hour.trim().parse().ok()?, minute.trim().parse().ok()?, 0)
}
