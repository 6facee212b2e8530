//! Instagram link extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static INSTAGRAM_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://www\.instagram\.com/[^\s)]+")
        .expect("instagram url pattern should compile - this is a bug")
});

static INSTAGRAM_LABELED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Instagram[リンク：:\s]*([^\s)]+)")
        .expect("labeled instagram pattern should compile - this is a bug")
});

static INSTAGRAM_HANDLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)instagram\.com/([^/?\s]+)")
        .expect("instagram handle pattern should compile - this is a bug")
});

static ALTERNATE_CHANNEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)tiktok").expect("alternate channel pattern should compile - this is a bug")
});

/// Pull an Instagram URL out of free text.
///
/// Tries the bare `https://www.instagram.com/...` form first, then the
/// labeled `Instagramリンク：...` form. Text from a TikTok marker onward is
/// cut off before matching; trailing slashes and closing parens are
/// stripped from the result.
#[must_use]
pub fn extract_instagram_url(text: &str) -> Option<String> {
    let scanned = truncate_alternate_channels(text);
    if let Some(found) = INSTAGRAM_URL.find(scanned) {
        return Some(strip_url_tail(found.as_str()));
    }
    if let Some(caps) = INSTAGRAM_LABELED.captures(scanned) {
        let candidate = caps[1].trim();
        if candidate.contains("instagram.com") {
            return Some(strip_url_tail(candidate));
        }
    }
    None
}

/// Handle portion of an Instagram URL
/// (`https://www.instagram.com/yodare_recipe/` → `yodare_recipe`).
#[must_use]
pub fn instagram_handle(url: &str) -> Option<String> {
    INSTAGRAM_HANDLE.captures(url).map(|caps| caps[1].trim().to_string())
}

/// Strip trailing slashes and closing parens from an extracted URL.
#[must_use]
pub fn strip_url_tail(url: &str) -> String {
    url.trim_end_matches([')', '/']).to_string()
}

fn truncate_alternate_channels(text: &str) -> &str {
    match ALTERNATE_CHANNEL.find(text) {
        Some(found) => &text[..found.start()],
        None => text,
    }
}
