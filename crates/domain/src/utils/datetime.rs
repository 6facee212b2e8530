//! Date and time canonicalization and formatting.
//!
//! Calendar text carries dates as `1月31日` and times as `午後12:00`; the
//! canonical draft forms are `1/31` and 24-hour `HH:MM`. Every function here
//! is total: input that matches no pattern passes through unchanged, and
//! malformed values sort last rather than failing.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::WEEKDAY_JA;

static LEADING_CLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}:[0-9]{2}").expect("leading clock pattern should compile - this is a bug")
});

static MERIDIEM_CLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(午前|午後)?\s*([0-9]{1,2}):([0-9]{2})")
        .expect("meridiem clock pattern should compile - this is a bug")
});

static MONTH_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)月\s*([0-9]+)日").expect("month-day pattern should compile - this is a bug")
});

/// Convert a time string to canonical 24-hour form.
///
/// `午後12:00` → `12:00`, `午前9:00` → `09:00`. A string already starting
/// with a clock is taken verbatim up to a range separator (`12:00～1:00` →
/// `12:00`); anything else passes through unchanged.
#[must_use]
pub fn canonicalize_time(raw: &str) -> String {
    if LEADING_CLOCK.is_match(raw) {
        return range_start(raw);
    }
    if let Some(caps) = MERIDIEM_CLOCK.captures(raw) {
        let meridiem = caps.get(1).map(|m| m.as_str());
        let hour: u32 = caps[2].parse().unwrap_or(0);
        let minute = &caps[3];
        let hour = match meridiem {
            Some("午後") if hour != 12 => hour + 12,
            Some("午前") if hour == 12 => 0,
            _ => hour,
        };
        return format!("{hour:02}:{minute}");
    }
    range_start(raw)
}

/// Convert a date string to canonical `M/D` form.
///
/// `1月31日` and `1月 31日 (土曜日)` both become `1/31`; anything the
/// pattern misses passes through unchanged.
#[must_use]
pub fn canonicalize_date(raw: &str) -> String {
    match MONTH_DAY.captures(raw) {
        Some(caps) => format!("{}/{}", &caps[1], &caps[2]),
        None => raw.to_string(),
    }
}

/// Composite sort key for `M/D` + `HH:MM` pairs, anchored to `year`.
///
/// Missing or malformed parts yield [`NaiveDateTime::MAX`] so broken
/// entries sort after every parsable one.
#[must_use]
pub fn sort_key(date: &str, time: &str, year: i32) -> NaiveDateTime {
    let date = date.trim();
    let time = time.trim();
    if date.is_empty() || time.is_empty() {
        return NaiveDateTime::MAX;
    }
    let Some(resolved) = resolve_month_day(date, year) else {
        return NaiveDateTime::MAX;
    };
    let Some((hour, minute)) = clock_parts(time) else {
        return NaiveDateTime::MAX;
    };
    resolved.and_hms_opt(hour, minute, 0).unwrap_or(NaiveDateTime::MAX)
}

/// Resolve a canonical `M/D` date against a year.
///
/// Returns `None` for anything that does not parse to a real calendar day.
#[must_use]
pub fn resolve_month_day(date: &str, year: i32) -> Option<NaiveDate> {
    let (month, day) = month_day(date.trim())?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Long date line: `2/24` + `21:00` → `2月24日（火）　21:00〜`.
///
/// Unresolvable dates fall back to `{date} {time}〜`.
#[must_use]
pub fn format_date_long(date: &str, time: &str, year: i32) -> String {
    match resolve(date, year) {
        Some((month, day, weekday)) => format!("{month}月{day}日（{weekday}）　{time}〜"),
        None => format!("{date} {time}〜"),
    }
}

/// Short date line: `2/24` + `21:00` → `2/24（火）21:00～`.
///
/// Unresolvable dates fall back to `{date} {time}～`.
#[must_use]
pub fn format_date_short(date: &str, time: &str, year: i32) -> String {
    match resolve(date, year) {
        Some((month, day, weekday)) => format!("{month}/{day}（{weekday}）{time}～"),
        None => format!("{date} {time}～"),
    }
}

/// Text before a wave-dash range separator (`12:00～1:00` → `12:00`).
fn range_start(raw: &str) -> String {
    raw.split(['～', '〜']).next().unwrap_or(raw).trim().to_string()
}

fn month_day(date: &str) -> Option<(u32, u32)> {
    let mut segments = date.split('/');
    let month = segments.next()?.trim().parse().ok()?;
    let day = segments.next()?.trim().parse().ok()?;
    Some((month, day))
}

fn clock_parts(time: &str) -> Option<(u32, u32)> {
    if !time.contains(':') {
        return Some((0, 0));
    }
    let mut segments = time.split(':');
    let hour = segments.next()?.trim().parse().ok()?;
    let minute = match segments.next() {
        Some(raw) => raw.trim().parse().ok()?,
        None => 0,
    };
    Some((hour, minute))
}

fn resolve(date: &str, year: i32) -> Option<(u32, u32, char)> {
    let resolved = resolve_month_day(date, year)?;
    let weekday = WEEKDAY_JA[resolved.weekday().num_days_from_monday() as usize];
    Some((resolved.month(), resolved.day(), weekday))
}
