//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Posting schedule
pub const ADVANCE_POST_TIME: &str = "20:00";
pub const STARTING_SOON_LEAD_MINUTES: i64 = 5;

// Discord channels
pub const CHANNEL_MEMBERS: &str = "#万垢生限定";
pub const CHANNEL_GENRE: &str = "#グルコン告知";
pub const CHANNEL_DEFAULT: &str = "#イベント告知";

// Batch export placeholders for rows that cannot be rendered
pub const SKIP_MISSING_FIELDS: &str = "（スキップ：必須項目不足）";
pub const SKIP_MISSING_TEMPLATE: &str = "（スキップ：テンプレート未登録）";

// Monthly overview formatting
pub const NO_EVENTS_PLACEHOLDER: &str = "（今月の予定はありません）";
pub const FALLBACK_GENRE_KEY: &str = "その他";
pub const WEEKDAY_JA: [char; 7] = ['月', '火', '水', '木', '金', '土', '日'];
pub const CIRCLED_DIGITS: [char; 10] = ['①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩'];

// Genre decoration
pub const GENRE_SUFFIX: &str = "ジャンル";
// Any char above this code point counts as an existing marker; looser than a
// strict pictograph check.
pub const DECORATED_GENRE_THRESHOLD: u32 = 0x1F000;
