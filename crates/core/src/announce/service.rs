//! Announcement rendering service - core business logic

use kokuchi_domain::types::{
    DraftField, EventCategory, EventDraft, EventPhase, EventType, FixedZoomCatalog, GenreCatalog,
};
use kokuchi_domain::utils::link::instagram_handle;

use super::templates::TemplateCatalog;

/// Outcome of checking a draft against the fields its event type requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    /// Whether every required field was present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable messages, one per missing field, in requirement order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Renders announcement text from templates and event drafts.
///
/// Rendering enriches the draft in place before substitution: fixed Zoom
/// access is filled into blank fields, `time_jp` is derived from `time`,
/// the genre picks up its marker, and a URL-shaped teacher name is replaced
/// by the Instagram handle. Enriched values stay on the draft so follow-up
/// renders of the same event see them.
pub struct AnnouncementEngine {
    templates: TemplateCatalog,
    fixed_zoom: FixedZoomCatalog,
    genres: GenreCatalog,
}

impl AnnouncementEngine {
    /// Create an engine over the given catalogs.
    #[must_use]
    pub fn new(
        templates: TemplateCatalog,
        fixed_zoom: FixedZoomCatalog,
        genres: GenreCatalog,
    ) -> Self {
        Self { templates, fixed_zoom, genres }
    }

    /// Check that the draft carries every field its event type requires.
    ///
    /// All required fields are checked, so the report lists every gap at
    /// once rather than stopping at the first. A field counts as present
    /// when its trimmed text is non-empty.
    #[must_use]
    pub fn validate(&self, draft: &EventDraft) -> ValidationReport {
        let errors = self
            .required_fields(draft.event_type)
            .into_iter()
            .filter(|field| !draft.has_field(*field))
            .map(|field| format!("必須項目 '{field}' が不足しています"))
            .collect();
        ValidationReport { errors }
    }

    /// Render the announcement for a draft, enriching it in place.
    ///
    /// Returns `None` when the draft has no event type or no template is
    /// registered for it; the draft is left untouched in that case.
    pub fn render(&self, draft: &mut EventDraft) -> Option<String> {
        let event_type = draft.event_type?;
        let template = self.templates.get(event_type)?;
        self.enrich(draft, event_type);
        Some(substitute(template, draft))
    }

    /// Required fields for an event type, in the order they are reported.
    fn required_fields(&self, event_type: Option<EventType>) -> Vec<DraftField> {
        let Some(event_type) = event_type else {
            // Without a type there is no fixed Zoom entry to fall back on.
            return vec![DraftField::Time, DraftField::EventType, DraftField::ZoomUrl];
        };
        let has_fixed = self.fixed_zoom.contains(event_type);
        let mut required = vec![DraftField::Time, DraftField::EventType];
        if !has_fixed {
            required.push(DraftField::ZoomUrl);
        }
        match event_type.phase {
            EventPhase::AdvanceNotice => {
                required.push(DraftField::Date);
                if event_type.requires_teacher() {
                    required.push(DraftField::TeacherName);
                }
                if !has_fixed {
                    required.push(DraftField::MeetingId);
                    required.push(DraftField::Passcode);
                }
            }
            EventPhase::StartingSoon => match event_type.category {
                EventCategory::GenreSession => {
                    required.extend([
                        DraftField::Genre,
                        DraftField::TeacherName,
                        DraftField::InstagramUrl,
                    ]);
                }
                // Starting-soon reminders for talks and meetups repeat the
                // advance notice, so nothing beyond the basics is needed.
                EventCategory::StudentTalk
                | EventCategory::InstructorTalk
                | EventCategory::Meetup
                | EventCategory::MembersMeetup => {}
                EventCategory::SpecialLecture => {
                    required.push(DraftField::Date);
                    required.push(DraftField::TeacherName);
                }
            },
            EventPhase::Graduates => {
                required.push(DraftField::Date);
                if event_type.requires_teacher() {
                    required.push(DraftField::TeacherName);
                }
            }
        }
        required
    }

    fn enrich(&self, draft: &mut EventDraft, event_type: EventType) {
        if let Some(access) = self.fixed_zoom.get(event_type) {
            fill_if_blank(&mut draft.zoom_url, &access.zoom_url);
            fill_if_blank(&mut draft.meeting_id, &access.meeting_id);
            fill_if_blank(&mut draft.passcode, &access.passcode);
        }
        if draft.time_jp.is_none() {
            if let Some(time) = draft.time.as_deref() {
                draft.time_jp = Some(hour_label(time));
            }
        }
        if let Some(genre) = draft.genre.as_deref() {
            if !genre.is_empty() {
                draft.genre = Some(self.genres.decorate(genre));
            }
        }
        normalize_teacher(draft);
    }
}

/// Replace every supported `{{variable}}` with the draft's text for it.
///
/// Absent fields substitute as empty strings, which keeps unknown
/// placeholders visible in the output while known ones always disappear.
fn substitute(template: &str, draft: &EventDraft) -> String {
    let mut rendered = template.to_string();
    for field in DraftField::ALL {
        let placeholder = format!("{{{{{field}}}}}");
        rendered = rendered.replace(&placeholder, &draft.field_text(field));
    }
    rendered
}

/// Fill a slot only when it is absent or holds an empty string.
fn fill_if_blank(slot: &mut Option<String>, value: &str) {
    if slot.as_deref().map_or(true, str::is_empty) {
        *slot = Some(value.to_string());
    }
}

/// `19:00` → `19時`; times without a clock part pass through trimmed.
fn hour_label(time: &str) -> String {
    let trimmed = time.trim();
    match trimmed.split_once(':') {
        Some((hour, _)) => format!("{hour}時"),
        None => trimmed.to_string(),
    }
}

/// Replace a URL-shaped or missing teacher name with the Instagram handle.
///
/// Names are kept as plain text on purpose; linking them would obscure who
/// is speaking. The name is only rewritten when a handle can actually be
/// extracted from `instagram_url`.
fn normalize_teacher(draft: &mut EventDraft) {
    let teacher = draft.teacher_name.as_deref().unwrap_or("");
    let url_shaped = teacher.contains("instagram.com") || teacher.starts_with("http");
    let missing_with_link = teacher.is_empty()
        && draft.instagram_url.as_deref().map_or(false, |url| !url.is_empty());
    if !url_shaped && !missing_with_link {
        return;
    }
    let handle = draft
        .instagram_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .and_then(instagram_handle);
    if let Some(handle) = handle {
        draft.teacher_name = Some(handle);
    }
}
