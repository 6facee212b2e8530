//! Monthly overview builder - core business logic

use kokuchi_domain::constants::{
    CIRCLED_DIGITS, FALLBACK_GENRE_KEY, GENRE_SUFFIX, NO_EVENTS_PLACEHOLDER,
};
use kokuchi_domain::types::genre::{base_name, display_name};
use kokuchi_domain::types::{EventCategory, EventDraft, GenreCatalog};
use kokuchi_domain::utils::datetime::{format_date_long, format_date_short, sort_key};

/// Assembles the Markdown overview of one month's advance notices.
///
/// Section order is fixed: special lectures (only when any exist), then
/// instructor talks, student talks, and genre sessions grouped by genre.
/// Meetups are announced separately and never appear here.
pub struct MonthlyOverviewBuilder {
    year: i32,
    genres: GenreCatalog,
}

impl MonthlyOverviewBuilder {
    /// Create a builder anchored to `year` for date resolution.
    #[must_use]
    pub fn new(year: i32, genres: GenreCatalog) -> Self {
        Self { year, genres }
    }

    /// Build the overview text for `month_label` (e.g. `3月`).
    ///
    /// Only advance-notice drafts participate; each section sorts its
    /// events by date, with unparsable dates last.
    #[must_use]
    pub fn build(&self, events: &[EventDraft], month_label: &str) -> String {
        let mut special = Vec::new();
        let mut instructor = Vec::new();
        let mut student = Vec::new();
        let mut genre_sessions = Vec::new();
        for event in events {
            let Some(event_type) = event.event_type else { continue };
            if !event_type.is_advance_notice() {
                continue;
            }
            match event_type.category {
                EventCategory::SpecialLecture => special.push(event),
                EventCategory::InstructorTalk => instructor.push(event),
                EventCategory::StudentTalk => student.push(event),
                EventCategory::GenreSession => genre_sessions.push(event),
                EventCategory::Meetup | EventCategory::MembersMeetup => {}
            }
        }
        self.sort_by_date(&mut special);
        self.sort_by_date(&mut instructor);
        self.sort_by_date(&mut student);
        self.sort_by_date(&mut genre_sessions);

        let mut lines: Vec<String> = vec![format!("# {month_label}のイベント案内📢"), String::new()];

        if !special.is_empty() {
            lines.push("## 【特別講義】".to_string());
            lines.push(String::new());
            for (index, event) in special.iter().enumerate() {
                lines.push(format!("{}開催日：{}", ordinal(index + 1), self.long_date(event)));
                lines.push(format!("講師：{}", field_text(&event.teacher_name)));
                push_link(&mut lines, event);
                lines.push(String::new());
            }
            lines.push(String::new());
        }

        lines.push("## 【講師対談】".to_string());
        lines.push(String::new());
        if instructor.is_empty() {
            lines.push(NO_EVENTS_PLACEHOLDER.to_string());
            lines.push(String::new());
        } else {
            for event in &instructor {
                lines.push(format!("開催日：{}", self.long_date(event)));
                lines.push(format!("講師：{}", field_text(&event.teacher_name)));
                push_link(&mut lines, event);
                lines.push(String::new());
            }
        }
        lines.push(String::new());

        lines.push("## 【生徒対談】".to_string());
        lines.push(String::new());
        if student.is_empty() {
            lines.push(NO_EVENTS_PLACEHOLDER.to_string());
            lines.push(String::new());
        } else {
            for (index, event) in student.iter().enumerate() {
                lines.push(format!("{}開催日：{}", ordinal(index + 1), self.long_date(event)));
                // The guest is a student, so the name stands without a title.
                lines.push(field_text(&event.teacher_name));
                push_link(&mut lines, event);
                lines.push(String::new());
            }
        }
        lines.push(String::new());

        lines.push("## 【ジャンル特化グルコン】".to_string());
        lines.push(String::new());
        if genre_sessions.is_empty() {
            lines.push(NO_EVENTS_PLACEHOLDER.to_string());
            lines.push(String::new());
        } else {
            for (group_key, group) in group_by_genre(&genre_sessions) {
                let raw_genre = group[0]
                    .genre
                    .clone()
                    .filter(|genre| !genre.is_empty())
                    .unwrap_or_else(|| group_key.clone());
                let marker = self.genres.marker_for(&raw_genre);
                let mut label = display_name(&raw_genre);
                if label.is_empty() {
                    label = format!("{group_key}{GENRE_SUFFIX}");
                }
                lines.push(format!("## {marker}{label}"));
                lines.push(String::new());
                for (index, event) in group.iter().enumerate() {
                    lines.push(format!(
                        "{}開催日：{}",
                        ordinal(index + 1),
                        self.short_date(event)
                    ));
                    lines.push(format!("講師：{}", field_text(&event.teacher_name)));
                    push_link(&mut lines, event);
                    lines.push(String::new());
                }
                lines.push(String::new());
            }
        }

        lines.join("\n").trim().to_string()
    }

    fn sort_by_date(&self, events: &mut [&EventDraft]) {
        events.sort_by_key(|event| {
            sort_key(
                event.date.as_deref().unwrap_or(""),
                event.time.as_deref().unwrap_or(""),
                self.year,
            )
        });
    }

    fn long_date(&self, event: &EventDraft) -> String {
        format_date_long(
            event.date.as_deref().unwrap_or(""),
            event.time.as_deref().unwrap_or(""),
            self.year,
        )
    }

    fn short_date(&self, event: &EventDraft) -> String {
        format_date_short(
            event.date.as_deref().unwrap_or(""),
            event.time.as_deref().unwrap_or(""),
            self.year,
        )
    }
}

/// Group sessions by normalized genre base, keeping first-seen group order.
///
/// Events inside a group keep the date order of the input slice.
fn group_by_genre<'a>(events: &[&'a EventDraft]) -> Vec<(String, Vec<&'a EventDraft>)> {
    let mut groups: Vec<(String, Vec<&EventDraft>)> = Vec::new();
    for event in events {
        let raw = event.genre.as_deref().filter(|genre| !genre.is_empty());
        let mut key = base_name(raw.unwrap_or(FALLBACK_GENRE_KEY));
        if key.is_empty() {
            key = FALLBACK_GENRE_KEY.to_string();
        }
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(event),
            None => groups.push((key, vec![event])),
        }
    }
    groups
}

/// `①` through `⑩`, then plain digits from 11 on.
fn ordinal(position: usize) -> String {
    match position.checked_sub(1).and_then(|index| CIRCLED_DIGITS.get(index)) {
        Some(digit) => digit.to_string(),
        None => position.to_string(),
    }
}

fn field_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn push_link(lines: &mut Vec<String>, event: &EventDraft) {
    if let Some(url) = event.instagram_url.as_deref() {
        if !url.is_empty() {
            lines.push(url.trim_end_matches('/').to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use kokuchi_domain::types::{EventPhase, EventType};

    use super::*;

    fn draft(
        category: EventCategory,
        phase: EventPhase,
        date: &str,
        time: &str,
        teacher: &str,
    ) -> EventDraft {
        EventDraft {
            event_type: Some(EventType::new(category, phase)),
            date: Some(date.to_string()),
            time: Some(time.to_string()),
            teacher_name: Some(teacher.to_string()),
            ..EventDraft::default()
        }
    }

    fn builder() -> MonthlyOverviewBuilder {
        MonthlyOverviewBuilder::new(2026, GenreCatalog::builtin())
    }

    #[test]
    fn empty_month_renders_placeholders_for_fixed_sections() {
        let text = builder().build(&[], "3月");
        assert!(text.starts_with("# 3月のイベント案内📢"));
        assert!(text.contains("## 【講師対談】\n\n（今月の予定はありません）"));
        assert!(text.contains("## 【生徒対談】\n\n（今月の予定はありません）"));
        assert!(text.contains("## 【ジャンル特化グルコン】\n\n（今月の予定はありません）"));
        // The special-lecture section only appears when lectures exist.
        assert!(!text.contains("特別講義"));
    }

    #[test]
    fn sections_appear_in_fixed_order_with_numbering() {
        let events = vec![
            draft(EventCategory::StudentTalk, EventPhase::AdvanceNotice, "3/20", "21:00", "ひな"),
            draft(EventCategory::SpecialLecture, EventPhase::AdvanceNotice, "3/5", "20:00", "だい"),
            draft(EventCategory::StudentTalk, EventPhase::AdvanceNotice, "3/10", "21:00", "りこ"),
            draft(
                EventCategory::InstructorTalk,
                EventPhase::AdvanceNotice,
                "3/12",
                "21:00",
                "よだれ夫婦",
            ),
        ];
        let text = builder().build(&events, "3月");

        let special = text.find("## 【特別講義】").unwrap();
        let instructor = text.find("## 【講師対談】").unwrap();
        let student = text.find("## 【生徒対談】").unwrap();
        let genre = text.find("## 【ジャンル特化グルコン】").unwrap();
        assert!(special < instructor && instructor < student && student < genre);

        // Special lectures and student talks are numbered, instructor talks
        // are not, and student names stand bare.
        assert!(text.contains("①開催日：3月5日（木）　20:00〜"));
        assert!(text.contains("開催日：3月12日（木）　21:00〜\n講師：よだれ夫婦"));
        assert!(text.contains("①開催日：3月10日（火）　21:00〜\nりこ"));
        assert!(text.contains("②開催日：3月20日（金）　21:00〜\nひな"));
    }

    #[test]
    fn genre_sessions_group_by_base_name_in_first_seen_order() {
        let mut recipe_a =
            draft(EventCategory::GenreSession, EventPhase::AdvanceNotice, "3/14", "12:00", "ゆり");
        recipe_a.genre = Some("🍳レシピジャンル".to_string());
        let mut money =
            draft(EventCategory::GenreSession, EventPhase::AdvanceNotice, "3/8", "21:00", "たく");
        money.genre = Some("お金ジャンル".to_string());
        let mut recipe_b =
            draft(EventCategory::GenreSession, EventPhase::AdvanceNotice, "3/28", "12:00", "さき");
        recipe_b.genre = Some("レシピ".to_string());

        let text = builder().build(&[recipe_a, money, recipe_b], "3月");

        // Date order puts お金 first, so its group leads.
        let money_at = text.find("## 💰お金ジャンル").unwrap();
        let recipe_at = text.find("## 🍳レシピジャンル").unwrap();
        assert!(money_at < recipe_at);

        // Both recipe spellings land in one group, numbered together.
        assert!(text.contains("①開催日：3/14（土）12:00～\n講師：ゆり"));
        assert!(text.contains("②開催日：3/28（土）12:00～\n講師：さき"));
    }

    #[test]
    fn child_rearing_spellings_merge_into_one_group() {
        let mut kosodate =
            draft(EventCategory::GenreSession, EventPhase::AdvanceNotice, "3/3", "21:00", "まい");
        kosodate.genre = Some("子育てジャンル".to_string());
        let mut ikuji =
            draft(EventCategory::GenreSession, EventPhase::AdvanceNotice, "3/17", "21:00", "のん");
        ikuji.genre = Some("育児ジャンル".to_string());

        let text = builder().build(&[kosodate, ikuji], "3月");

        // One merged heading, with the display name normalized to 育児.
        assert_eq!(text.matches("## 👶").count(), 1);
        assert!(text.contains("## 👶育児ジャンル"));
        assert!(text.contains("①開催日：3/3（火）21:00～"));
        assert!(text.contains("②開催日：3/17（火）21:00～"));
    }

    #[test]
    fn missing_genre_falls_back_to_catch_all_group() {
        let event =
            draft(EventCategory::GenreSession, EventPhase::AdvanceNotice, "3/6", "21:00", "けい");
        let text = builder().build(&[event], "3月");
        assert!(text.contains("## その他ジャンル"));
    }

    #[test]
    fn starting_soon_and_meetup_drafts_are_excluded() {
        let events = vec![
            draft(EventCategory::StudentTalk, EventPhase::StartingSoon, "3/10", "21:00", "りこ"),
            draft(EventCategory::Meetup, EventPhase::AdvanceNotice, "3/15", "21:00", ""),
            draft(EventCategory::MembersMeetup, EventPhase::AdvanceNotice, "3/16", "10:00", ""),
        ];
        let text = builder().build(&events, "3月");
        assert!(text.contains("## 【生徒対談】\n\n（今月の予定はありません）"));
        assert!(!text.contains("3/15"));
        assert!(!text.contains("3/16"));
    }

    #[test]
    fn instagram_links_lose_trailing_slashes() {
        let mut event =
            draft(EventCategory::InstructorTalk, EventPhase::AdvanceNotice, "3/12", "21:00", "みき");
        event.instagram_url = Some("https://www.instagram.com/miki_sensei/".to_string());
        let text = builder().build(&[event], "3月");
        assert!(text.contains("講師：みき\nhttps://www.instagram.com/miki_sensei\n"));
    }

    #[test]
    fn eleventh_event_uses_plain_digits() {
        let events: Vec<EventDraft> = (1..=11)
            .map(|day| {
                draft(
                    EventCategory::StudentTalk,
                    EventPhase::AdvanceNotice,
                    &format!("3/{day}"),
                    "21:00",
                    "ゲスト",
                )
            })
            .collect();
        let text = builder().build(&events, "3月");
        assert!(text.contains("⑩開催日：3月10日"));
        assert!(text.contains("11開催日：3月11日"));
    }

    #[test]
    fn unparsable_dates_sort_after_parsable_ones() {
        let first =
            draft(EventCategory::StudentTalk, EventPhase::AdvanceNotice, "未定", "21:00", "あと");
        let second =
            draft(EventCategory::StudentTalk, EventPhase::AdvanceNotice, "3/2", "21:00", "さき");
        let text = builder().build(&[first, second], "3月");
        let parsable = text.find("3月2日").unwrap();
        let fallback = text.find("未定 21:00〜").unwrap();
        assert!(parsable < fallback);
    }
}
