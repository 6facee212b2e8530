//! Fixed Zoom metadata catalog.
//!
//! The recurring event types reuse standing Zoom rooms. Their credentials
//! are filled into drafts as defaults and never overwrite explicit values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event_type::{EventCategory, EventPhase, EventType};

/// Standing Zoom room credentials for one event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomAccess {
    pub zoom_url: String,
    pub meeting_id: String,
    pub passcode: String,
}

impl ZoomAccess {
    #[must_use]
    pub fn new(zoom_url: &str, meeting_id: &str, passcode: &str) -> Self {
        Self {
            zoom_url: zoom_url.to_string(),
            meeting_id: meeting_id.to_string(),
            passcode: passcode.to_string(),
        }
    }
}

/// Config-file shape for one fixed Zoom override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedZoomEntry {
    pub event_type: EventType,
    #[serde(flatten)]
    pub access: ZoomAccess,
}

/// Fixed Zoom metadata keyed by event type.
#[derive(Debug, Clone, Default)]
pub struct FixedZoomCatalog {
    entries: HashMap<EventType, ZoomAccess>,
}

impl FixedZoomCatalog {
    /// Catalog with the standing rooms for the recurring event types.
    ///
    /// Genre sessions share one room across all three phases; the two talk
    /// formats share another; meetups have their own. Members meetups and
    /// special lectures have no standing room.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::default();

        let genre_room = ZoomAccess::new(
            "https://us06web.zoom.us/j/86783391679?pwd=A7t1L99e5NHZBJOj5tMEPNHOUAyhh8.1",
            "867 8339 1679",
            "0000",
        );
        for phase in [EventPhase::AdvanceNotice, EventPhase::StartingSoon, EventPhase::Graduates] {
            catalog.upsert(EventType::new(EventCategory::GenreSession, phase), genre_room.clone());
        }

        let talk_room = ZoomAccess::new(
            "https://us06web.zoom.us/j/84044741268?pwd=kkc7BHgUm82aaiNC3HxHGZVMSVF799.1",
            "840 4474 1268",
            "009706",
        );
        for category in [EventCategory::StudentTalk, EventCategory::InstructorTalk] {
            for phase in [EventPhase::AdvanceNotice, EventPhase::StartingSoon] {
                catalog.upsert(EventType::new(category, phase), talk_room.clone());
            }
        }

        let meetup_room = ZoomAccess::new(
            "https://us06web.zoom.us/j/81644840347?pwd=NdMeW9PWVXz4Wp2QqscIHvjecEUV6L.1",
            "816 4484 0347",
            "121550",
        );
        for phase in [EventPhase::AdvanceNotice, EventPhase::StartingSoon] {
            catalog.upsert(EventType::new(EventCategory::Meetup, phase), meetup_room.clone());
        }

        catalog
    }

    /// Built-in rooms plus config overrides; overrides win per event type.
    #[must_use]
    pub fn with_overrides(overrides: Vec<FixedZoomEntry>) -> Self {
        let mut catalog = Self::builtin();
        for entry in overrides {
            catalog.upsert(entry.event_type, entry.access);
        }
        catalog
    }

    pub fn upsert(&mut self, event_type: EventType, access: ZoomAccess) {
        self.entries.insert(event_type, access);
    }

    #[must_use]
    pub fn get(&self, event_type: EventType) -> Option<&ZoomAccess> {
        self.entries.get(&event_type)
    }

    /// Whether this type has a standing room.
    #[must_use]
    pub fn contains(&self, event_type: EventType) -> bool {
        self.entries.contains_key(&event_type)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
