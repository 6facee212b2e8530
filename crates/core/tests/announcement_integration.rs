//! Integration tests for the announcement pipeline
//!
//! End-to-end coverage from calendar text and API payloads through
//! validation, enrichment and rendering, plus batch schedule planning.

use kokuchi_core::{
    draft_from_remote, AnnouncementEngine, BatchPlanner, RemoteEvent, TemplateCatalog,
};
use kokuchi_domain::parse_calendar_text;
use kokuchi_domain::types::{
    EventCategory, EventDraft, EventPhase, EventType, FixedZoomCatalog, GenreCatalog,
};

const GENRE_ADVANCE_TEMPLATE: &str = "@everyone\n\n\
明日{{time_jp}}から{{genre}}のグルコンを開催します🎉\n\n\
開催日：{{date}} {{time}}〜\n\
講師：{{teacher_name}}先生\n\
{{instagram_url}}\n\n\
Zoomリンク：{{zoom_url}}\n\
ミーティングID: {{meeting_id}}\n\
パスコード: {{passcode}}";

const GENRE_SOON_TEMPLATE: &str = "@everyone\n\n\
まもなく{{genre}}のグルコンが始まります！\n\
講師：{{teacher_name}}先生\n\
{{zoom_url}}";

fn engine() -> AnnouncementEngine {
    let mut templates = TemplateCatalog::new();
    templates.insert(
        EventType::new(EventCategory::GenreSession, EventPhase::AdvanceNotice),
        GENRE_ADVANCE_TEMPLATE,
    );
    templates.insert(
        EventType::new(EventCategory::GenreSession, EventPhase::StartingSoon),
        GENRE_SOON_TEMPLATE,
    );
    AnnouncementEngine::new(templates, FixedZoomCatalog::builtin(), GenreCatalog::builtin())
}

// ============================================================================
// Calendar Paste to Announcement
// ============================================================================

/// Test the full path from a pasted calendar entry to posted text
///
/// Scenario: staff pastes a six-line calendar entry and expects a finished
/// announcement with fixed Zoom access and the derived hour label
#[test]
fn test_calendar_paste_renders_complete_announcement() {
    let text = "【ジャンル特化グルコン】よだれ夫婦講師（レシピジャンル）\n\
                1月 31日 (土曜日)⋅午後12:00～1:00\n\
                Instagramリンク：https://www.instagram.com/yurina_diet.recipe";

    let mut draft = parse_calendar_text(text, &GenreCatalog::builtin());
    let engine = engine();

    let report = engine.validate(&draft);
    assert!(report.is_valid(), "unexpected errors: {:?}", report.errors());

    let rendered = engine.render(&mut draft).expect("template is registered");
    assert!(rendered.contains("明日12時から🍳レシピジャンルのグルコンを開催します"));
    assert!(rendered.contains("開催日：1/31 12:00〜"));
    assert!(rendered.contains("講師：よだれ夫婦先生"));
    assert!(rendered.contains("https://www.instagram.com/yurina_diet.recipe"));
    assert!(rendered
        .contains("Zoomリンク：https://us06web.zoom.us/j/86783391679?pwd=A7t1L99e5NHZBJOj5tMEPNHOUAyhh8.1"));
    assert!(rendered.contains("ミーティングID: 867 8339 1679"));
    assert!(rendered.contains("パスコード: 0000"));
    // No placeholder survives in the output.
    assert!(!rendered.contains("{{"));
}

/// Test that validation gates the same paste when the teacher is missing
#[test]
fn test_incomplete_paste_is_rejected_with_named_fields() {
    let text = "【ジャンル特化グルコン】\n1月 31日 (土曜日)⋅午後12:00～1:00";
    let draft = parse_calendar_text(text, &GenreCatalog::builtin());

    let report = engine().validate(&draft);
    assert!(!report.is_valid());
    assert_eq!(report.errors(), ["必須項目 'teacher_name' が不足しています"]);
}

// ============================================================================
// Manual Draft Entry
// ============================================================================

/// Test the manual-entry flow used when no calendar line is available
///
/// Scenario: staff types the fields by hand for a starting-soon session;
/// the genre gains its marker and the teacher name is taken from the link
#[test]
fn test_manual_starting_soon_entry() {
    let mut draft = EventDraft {
        event_type: Some(EventType::new(EventCategory::GenreSession, EventPhase::StartingSoon)),
        time: Some("21:00".to_string()),
        genre: Some("ダイエット".to_string()),
        teacher_name: Some("https://www.instagram.com/fit_mama/".to_string()),
        instagram_url: Some("https://www.instagram.com/fit_mama/".to_string()),
        ..EventDraft::default()
    };
    let engine = engine();

    assert!(engine.validate(&draft).is_valid());
    let rendered = engine.render(&mut draft).expect("template is registered");
    assert!(rendered.contains("まもなく🏃\u{200d}♀\u{fe0f}ダイエットジャンルのグルコンが始まります！"));
    assert!(rendered.contains("講師：fit_mama先生"));
    assert!(rendered.contains("https://us06web.zoom.us/j/86783391679"));
}

// ============================================================================
// Calendar API Payload to Schedule
// ============================================================================

/// Test the API-sourced path through to a posting schedule
///
/// Scenario: one fetched event becomes an advance notice the evening
/// before, plus a reminder five minutes before start
#[test]
fn test_remote_event_plans_two_postings() {
    let payload = r#"{
        "id": "evt42",
        "summary": "【ジャンル特化グルコン】ゆり講師（レシピ）",
        "description": "Instagramリンク：https://www.instagram.com/yuri.recipe",
        "start": {"dateTime": "2026-03-10T19:00:00+09:00"}
    }"#;
    let remote: RemoteEvent = serde_json::from_str(payload).expect("payload decodes");
    let draft = draft_from_remote(&remote, &GenreCatalog::builtin());

    let engine = engine();
    let rows = BatchPlanner::new(&engine, 2026).plan(std::slice::from_ref(&draft));

    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].post_date.as_str(), rows[0].post_time.as_str()), ("3/9", "20:00"));
    assert!(rows[0].message.contains("開催日：3/10 19:00〜"));
    assert_eq!((rows[1].post_date.as_str(), rows[1].post_time.as_str()), ("3/10", "18:55"));
    assert!(rows[1].message.contains("まもなく🍳レシピジャンルのグルコン"));
    assert_eq!(rows[0].channel, "#グルコン告知");
    assert_eq!(rows[1].channel, "#グルコン告知");
}

/// Test that drafts the engine cannot render still occupy schedule rows
#[test]
fn test_unrenderable_drafts_keep_their_rows() {
    let talk = EventDraft {
        event_type: Some(EventType::new(EventCategory::StudentTalk, EventPhase::AdvanceNotice)),
        date: Some("3/12".to_string()),
        time: Some("21:00".to_string()),
        teacher_name: Some("りこ".to_string()),
        ..EventDraft::default()
    };
    let incomplete = EventDraft {
        event_type: Some(EventType::new(EventCategory::GenreSession, EventPhase::AdvanceNotice)),
        date: Some("3/14".to_string()),
        ..EventDraft::default()
    };

    let engine = engine();
    let rows = BatchPlanner::new(&engine, 2026).plan(&[talk, incomplete]);

    // Each advance notice expands, so four rows in input order.
    assert_eq!(rows.len(), 4);
    // The student talk validates but has no registered template.
    assert_eq!(rows[0].message, "（スキップ：テンプレート未登録）");
    assert_eq!(rows[0].post_date, "3/11");
    // The incomplete session fails validation outright.
    assert_eq!(rows[2].message, "（スキップ：必須項目不足）");
    assert_eq!(rows[2].post_date, "3/13");
}
