//! Genre marker catalog.
//!
//! Decorates genre names with their pictographic marker
//! (`レシピジャンル` → `🍳レシピジャンル`) and normalizes genre spellings
//! for monthly grouping.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{DECORATED_GENRE_THRESHOLD, GENRE_SUFFIX};

/// Built-in keyword → marker pairs, in lookup order.
const BUILTIN_MARKERS: [(&str, &str); 23] = [
    ("レシピ", "🍳"),
    ("子育て", "👶"),
    ("お金", "💰"),
    ("スキル", "💰"),
    ("お金・スキル", "💰"),
    ("美容", "💄"),
    ("ファッション", "👗"),
    ("健康", "💪"),
    ("ダイエット", "🏃\u{200d}♀\u{fe0f}"),
    ("スポット", "📍"),
    ("暮らし", "🏠"),
    ("ビジネス", "💼"),
    ("教育", "📚"),
    ("エンタメ", "🎬"),
    ("スポーツ", "⚽"),
    ("音楽", "🎵"),
    ("アート", "🎨"),
    ("テクノロジー", "💻"),
    ("投資", "📈"),
    ("不動産", "🏘\u{fe0f}"),
    ("婚活", "💑"),
    ("ママ", "👩\u{200d}👧"),
    ("パパ", "👨\u{200d}👦"),
];

/// Spelling pairs collapsed to one canonical base for grouping.
const SYNONYM_BASES: [(&str, &str); 1] = [("子育て", "育児")];

// Covers the marker emoji plus the joiners and variation selectors that
// ZWJ sequences like 🏃\u{200d}♀\u{fe0f} are built from.
static LEADING_MARKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\s\x{200D}\x{FE0F}\x{2600}-\x{27BF}\x{1F300}-\x{1F9FF}]+")
        .expect("leading-marks pattern should compile - this is a bug")
});

/// One keyword → marker entry, as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreMarker {
    pub keyword: String,
    #[serde(default)]
    pub marker: String,
}

/// Ordered genre keyword → marker table.
///
/// Lookup is substring based and first-match-wins in entry order, which
/// decides the marker when a genre contains several keywords.
#[derive(Debug, Clone)]
pub struct GenreCatalog {
    entries: Vec<GenreMarker>,
}

impl GenreCatalog {
    /// Catalog holding only the built-in markers.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_MARKERS
            .iter()
            .map(|(keyword, marker)| GenreMarker {
                keyword: (*keyword).to_string(),
                marker: (*marker).to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Built-in catalog with extra entries placed ahead of the built-ins, so
    /// they win the first-match scan.
    #[must_use]
    pub fn with_overrides(overrides: Vec<GenreMarker>) -> Self {
        let mut entries = overrides;
        entries.extend(Self::builtin().entries);
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attach the marker for a genre: `レシピジャンル` → `🍳レシピジャンル`.
    ///
    /// A genre already carrying a character above the decoration threshold is
    /// returned unchanged, which makes decoration idempotent.
    #[must_use]
    pub fn decorate(&self, genre: &str) -> String {
        if genre.is_empty() || looks_decorated(genre) {
            return genre.to_string();
        }
        let genre_lower = genre.to_lowercase();
        for entry in &self.entries {
            if genre.contains(&entry.keyword) || genre_lower.contains(&entry.keyword.to_lowercase())
            {
                let without_suffix = genre.replace(GENRE_SUFFIX, "");
                let clean = without_suffix.trim();
                return format!("{}{clean}{GENRE_SUFFIX}", entry.marker);
            }
        }
        genre.to_string()
    }

    /// Marker for a genre string, or empty when no entry matches.
    ///
    /// Matches the raw string, its base name, and synonym spellings, so a
    /// `育児` heading still finds the `子育て` marker.
    #[must_use]
    pub fn marker_for(&self, genre: &str) -> &str {
        if genre.is_empty() {
            return "";
        }
        let base = base_name(genre);
        for entry in &self.entries {
            let canonical = synonym_for(&entry.keyword);
            if genre.contains(&entry.keyword)
                || base == canonical
                || base == entry.keyword
                || genre.contains(canonical)
            {
                return &entry.marker;
            }
        }
        ""
    }
}

/// Genre with leading marker characters and the ジャンル suffix removed.
#[must_use]
pub fn strip_decoration(genre: &str) -> String {
    let without_marks = LEADING_MARKS.replace(genre, "");
    without_marks.replace(GENRE_SUFFIX, "").trim().to_string()
}

/// Normalized base used as the monthly grouping key: decoration stripped and
/// synonym spellings collapsed (`👶子育てジャンル` → `育児`).
#[must_use]
pub fn base_name(genre: &str) -> String {
    if genre.is_empty() {
        return String::new();
    }
    let stripped = strip_decoration(genre);
    synonym_for(&stripped).to_string()
}

/// Display name for grouping headings: the base plus the ジャンル suffix.
#[must_use]
pub fn display_name(genre: &str) -> String {
    let base = base_name(genre);
    if base.is_empty() {
        return String::new();
    }
    format!("{base}{GENRE_SUFFIX}")
}

fn synonym_for(keyword: &str) -> &str {
    SYNONYM_BASES.iter().find(|(from, _)| *from == keyword).map_or(keyword, |(_, to)| *to)
}

fn looks_decorated(genre: &str) -> bool {
    genre.chars().any(|c| c as u32 > DECORATED_GENRE_THRESHOLD)
}
