//! Event name parser.
//!
//! Extracts the event type, teacher name and genre from one event-name
//! string such as `【ジャンル特化グルコン】よだれ夫婦講師（レシピジャンル）`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{EventCategory, EventDraft, EventPhase, EventType, GenreCatalog};

static TEACHER_AFTER_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("【.*?】(.+?)講師").expect("teacher pattern should compile - this is a bug")
});

static TEACHER_AFTER_BRACKET: Lazy<Regex> = Lazy::new(|| {
    Regex::new("】(.+?)講師").expect("teacher fallback pattern should compile - this is a bug")
});

static GENRE_PARENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new("（(.+?)）").expect("genre pattern should compile - this is a bug")
});

/// Parse one event name into a partial draft.
///
/// Always classifies an event type, falling back to the genre session when
/// no category marker matches. Teacher name and genre are omitted rather
/// than guessed when their patterns find nothing.
#[must_use]
pub fn parse_event_name(name: &str, genres: &GenreCatalog) -> EventDraft {
    EventDraft {
        event_type: Some(classify(name)),
        teacher_name: teacher_name(name),
        genre: genre_token(name).map(|genre| genres.decorate(&genre)),
        ..EventDraft::default()
    }
}

fn classify(name: &str) -> EventType {
    // The members marker is tested first; its name contains オン会, and the
    // marker may be split by decoration in the middle.
    let category = if name.contains("万垢生限定オン会")
        || (name.contains("万垢") && name.contains("限定オン会"))
    {
        EventCategory::MembersMeetup
    } else if name.contains("ジャンル特化グルコン") {
        EventCategory::GenreSession
    } else if name.contains("生徒対談") {
        EventCategory::StudentTalk
    } else if name.contains("講師対談") {
        EventCategory::InstructorTalk
    } else if name.contains("オン会") {
        EventCategory::Meetup
    } else {
        EventCategory::GenreSession
    };
    EventType::new(category, EventPhase::AdvanceNotice)
}

fn teacher_name(name: &str) -> Option<String> {
    TEACHER_AFTER_TITLE
        .captures(name)
        .or_else(|| TEACHER_AFTER_BRACKET.captures(name))
        .map(|caps| caps[1].trim().to_string())
}

fn genre_token(name: &str) -> Option<String> {
    GENRE_PARENS.captures(name).map(|caps| caps[1].trim().to_string())
}
