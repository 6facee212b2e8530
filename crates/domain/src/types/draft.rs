//! Event draft record.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::event_type::EventType;

/// Template variables a draft can supply.
///
/// The order of [`DraftField::ALL`] is the order substitution and
/// missing-field reporting walk through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Date,
    Time,
    TimeJp,
    EventType,
    TeacherName,
    InstagramUrl,
    ZoomUrl,
    EventName,
    Genre,
    MeetingId,
    Passcode,
    Facilitator,
    DiscussionEndTime,
    EndTime,
    RepresentativeName,
}

impl DraftField {
    /// Every supported template variable, in substitution order.
    pub const ALL: [Self; 15] = [
        Self::Date,
        Self::Time,
        Self::TimeJp,
        Self::EventType,
        Self::TeacherName,
        Self::InstagramUrl,
        Self::ZoomUrl,
        Self::EventName,
        Self::Genre,
        Self::MeetingId,
        Self::Passcode,
        Self::Facilitator,
        Self::DiscussionEndTime,
        Self::EndTime,
        Self::RepresentativeName,
    ];

    /// Variable name as written inside `{{...}}` placeholders and in
    /// missing-field messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::TimeJp => "time_jp",
            Self::EventType => "event_type",
            Self::TeacherName => "teacher_name",
            Self::InstagramUrl => "instagram_url",
            Self::ZoomUrl => "zoom_url",
            Self::EventName => "event_name",
            Self::Genre => "genre",
            Self::MeetingId => "meeting_id",
            Self::Passcode => "passcode",
            Self::Facilitator => "facilitator",
            Self::DiscussionEndTime => "discussion_end_time",
            Self::EndTime => "end_time",
            Self::RepresentativeName => "representative_name",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One event occurrence on its way to an announcement.
///
/// Parsers fill whatever their detectors recognize; enrichment later adds
/// fixed metadata and derived fields in place. `None` means "not supplied",
/// and a blank string counts the same as absent for validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_jp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facilitator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discussion_end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative_name: Option<String>,
}

impl EventDraft {
    /// String value for a field, empty when absent.
    #[must_use]
    pub fn field_text(&self, field: DraftField) -> String {
        if field == DraftField::EventType {
            return self.event_type.map(|event_type| event_type.to_string()).unwrap_or_default();
        }
        self.text_slot(field).cloned().unwrap_or_default()
    }

    /// Whether a field is present with non-blank content.
    #[must_use]
    pub fn has_field(&self, field: DraftField) -> bool {
        if field == DraftField::EventType {
            return self.event_type.is_some();
        }
        self.text_slot(field).is_some_and(|value| !value.trim().is_empty())
    }

    fn text_slot(&self, field: DraftField) -> Option<&String> {
        match field {
            DraftField::Date => self.date.as_ref(),
            DraftField::Time => self.time.as_ref(),
            DraftField::TimeJp => self.time_jp.as_ref(),
            DraftField::EventType => None,
            DraftField::TeacherName => self.teacher_name.as_ref(),
            DraftField::InstagramUrl => self.instagram_url.as_ref(),
            DraftField::ZoomUrl => self.zoom_url.as_ref(),
            DraftField::EventName => self.event_name.as_ref(),
            DraftField::Genre => self.genre.as_ref(),
            DraftField::MeetingId => self.meeting_id.as_ref(),
            DraftField::Passcode => self.passcode.as_ref(),
            DraftField::Facilitator => self.facilitator.as_ref(),
            DraftField::DiscussionEndTime => self.discussion_end_time.as_ref(),
            DraftField::EndTime => self.end_time.as_ref(),
            DraftField::RepresentativeName => self.representative_name.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventCategory, EventPhase};

    #[test]
    fn field_text_is_empty_for_absent_fields() {
        let draft = EventDraft::default();
        assert_eq!(draft.field_text(DraftField::Date), "");
        assert_eq!(draft.field_text(DraftField::EventType), "");
    }

    #[test]
    fn event_type_field_renders_display_string() {
        let draft = EventDraft {
            event_type: Some(EventType::new(EventCategory::StudentTalk, EventPhase::StartingSoon)),
            ..EventDraft::default()
        };
        assert_eq!(draft.field_text(DraftField::EventType), "生徒対談（間もなく開始）");
        assert!(draft.has_field(DraftField::EventType));
    }

    #[test]
    fn blank_values_count_as_absent() {
        let draft = EventDraft { teacher_name: Some("   ".to_string()), ..EventDraft::default() };
        assert!(!draft.has_field(DraftField::TeacherName));
        assert!(draft.field_text(DraftField::TeacherName).trim().is_empty());
    }

    #[test]
    fn serde_skips_absent_fields() {
        let draft = EventDraft {
            event_type: Some(EventType::new(EventCategory::Meetup, EventPhase::AdvanceNotice)),
            date: Some("1/31".to_string()),
            ..EventDraft::default()
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"date\":\"1/31\""));
        assert!(!json.contains("teacher_name"));

        let back: EventDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
