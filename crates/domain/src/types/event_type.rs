//! Event type enumeration.
//!
//! Every announcement is keyed by an event type: the combination of a
//! recurring-event category and a posting phase. The display form is the
//! Japanese string templates, catalogs and exports are keyed by, e.g.
//! `ジャンル特化グルコン（事前告知）`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{CHANNEL_DEFAULT, CHANNEL_GENRE, CHANNEL_MEMBERS};
use crate::errors::KokuchiError;

/// Recurring-event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    GenreSession,   // ジャンル特化グルコン
    StudentTalk,    // 生徒対談
    InstructorTalk, // 講師対談
    Meetup,         // オン会
    MembersMeetup,  // 万垢生限定オン会
    SpecialLecture, // 特別講義
}

impl EventCategory {
    /// Japanese label used in display strings and template keys.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GenreSession => "ジャンル特化グルコン",
            Self::StudentTalk => "生徒対談",
            Self::InstructorTalk => "講師対談",
            Self::Meetup => "オン会",
            Self::MembersMeetup => "万垢生限定オン会",
            Self::SpecialLecture => "特別講義",
        }
    }

    /// Whether announcements for this category list a teacher.
    #[must_use]
    pub const fn requires_teacher(self) -> bool {
        !matches!(self, Self::Meetup | Self::MembersMeetup)
    }
}

/// Posting phase of a recurring event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventPhase {
    AdvanceNotice, // 事前告知
    StartingSoon,  // 間もなく開始
    Graduates,     // 卒業生向け
}

impl EventPhase {
    /// Japanese label used in display strings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AdvanceNotice => "事前告知",
            Self::StartingSoon => "間もなく開始",
            Self::Graduates => "卒業生向け",
        }
    }
}

/// Category x phase pair identifying one announcement kind.
///
/// Serializes as its Japanese display string so templates, config files and
/// exports all share one spelling; parsing accepts exactly the members of
/// [`EventType::MEMBERS`] and rejects everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventType {
    pub category: EventCategory,
    pub phase: EventPhase,
}

impl EventType {
    /// The closed set of recognized event types.
    pub const MEMBERS: [Self; 13] = [
        Self::new(EventCategory::GenreSession, EventPhase::AdvanceNotice),
        Self::new(EventCategory::GenreSession, EventPhase::StartingSoon),
        Self::new(EventCategory::GenreSession, EventPhase::Graduates),
        Self::new(EventCategory::StudentTalk, EventPhase::AdvanceNotice),
        Self::new(EventCategory::StudentTalk, EventPhase::StartingSoon),
        Self::new(EventCategory::InstructorTalk, EventPhase::AdvanceNotice),
        Self::new(EventCategory::InstructorTalk, EventPhase::StartingSoon),
        Self::new(EventCategory::Meetup, EventPhase::AdvanceNotice),
        Self::new(EventCategory::Meetup, EventPhase::StartingSoon),
        Self::new(EventCategory::MembersMeetup, EventPhase::AdvanceNotice),
        Self::new(EventCategory::MembersMeetup, EventPhase::StartingSoon),
        Self::new(EventCategory::SpecialLecture, EventPhase::AdvanceNotice),
        Self::new(EventCategory::SpecialLecture, EventPhase::StartingSoon),
    ];

    #[must_use]
    pub const fn new(category: EventCategory, phase: EventPhase) -> Self {
        Self { category, phase }
    }

    /// Copy of this type with the phase switched.
    #[must_use]
    pub const fn with_phase(self, phase: EventPhase) -> Self {
        Self { category: self.category, phase }
    }

    #[must_use]
    pub const fn is_advance_notice(self) -> bool {
        matches!(self.phase, EventPhase::AdvanceNotice)
    }

    #[must_use]
    pub const fn is_starting_soon(self) -> bool {
        matches!(self.phase, EventPhase::StartingSoon)
    }

    /// Whether announcements of this type list a teacher.
    #[must_use]
    pub const fn requires_teacher(self) -> bool {
        self.category.requires_teacher()
    }

    /// Discord channel announcements of this type are posted to.
    #[must_use]
    pub const fn channel(self) -> &'static str {
        match self.category {
            EventCategory::MembersMeetup => CHANNEL_MEMBERS,
            EventCategory::GenreSession => CHANNEL_GENRE,
            _ => CHANNEL_DEFAULT,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}（{}）", self.category.label(), self.phase.label())
    }
}

impl FromStr for EventType {
    type Err = KokuchiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::MEMBERS
            .iter()
            .find(|member| member.to_string() == trimmed)
            .copied()
            .ok_or_else(|| KokuchiError::InvalidInput(format!("unknown event type: {trimmed}")))
    }
}

impl Serialize for EventType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
