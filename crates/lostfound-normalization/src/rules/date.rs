//! Date normalization to ISO 8601 calendar dates.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

/// `YYYY-MM-DD`, checked on the raw input.
static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid ISO date regex"));

/// `9 maja 2024`: day, Polish month name in the genitive, year.
static POLISH_LONG_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\s+(\p{L}+)\s+(\d{4})(?:\s*r\.?)?$").expect("Invalid Polish date regex")
});

/// Genitive month names, with and without diacritics.
const POLISH_MONTHS: &[(&str, u32)] = &[
    ("stycznia", 1),
    ("lutego", 2),
    ("marca", 3),
    ("kwietnia", 4),
    ("maja", 5),
    ("czerwca", 6),
    ("lipca", 7),
    ("sierpnia", 8),
    ("września", 9),
    ("wrzesnia", 9),
    ("października", 10),
    ("pazdziernika", 10),
    ("listopada", 11),
    ("grudnia", 12),
];

/// Polish words for "today", "yesterday" and "the day before yesterday".
const RELATIVE_DAYS: &[(&str, u64)] = &[
    ("dzis", 0),
    ("dziś", 0),
    ("dzisiaj", 0),
    ("wczoraj", 1),
    ("przedwczoraj", 2),
];

/// Day-first for numeric dates: this is Polish office data.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d.%m.%Y",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d %m %Y",
    "%Y%m%d",
    "%d-%b-%Y",  // 15-Jan-2024
    "%d %B %Y",  // 15 January 2024
    "%d %b %Y",  // 15 Jan 2024
    "%B %d, %Y", // January 15, 2024
    "%b %d, %Y", // Jan 15, 2024
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// True when the text is exactly `YYYY-MM-DD` (digits only, not validated
/// as a calendar date).
pub fn is_iso_date(value: &str) -> bool {
    ISO_DATE_REGEX.is_match(value)
}

/// Days before today named by a Polish relative-date word.
pub fn relative_days(value: &str) -> Option<u64> {
    let word = value.trim().to_lowercase();
    RELATIVE_DAYS
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, days)| *days)
}

/// Parses an absolute date in one of the accepted formats.
///
/// Timestamps carrying an offset are converted to UTC before the date is
/// taken. Years outside 1..=9999 are rejected so the result always prints
/// as four digits.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    try_parse_date(trimmed)
        .or_else(|| try_parse_datetime(trimmed).map(|dt| dt.date()))
        .or_else(|| try_parse_zoned(trimmed))
        .or_else(|| try_parse_polish_long(trimmed))
        .filter(|date| (1..=9999).contains(&date.year()))
}

/// Normalizes a date string to `YYYY-MM-DD`.
///
/// Already-ISO input is returned as is; relative words resolve against
/// `today`; anything unparseable is returned unchanged.
pub fn standardize_date(value: &str, today: NaiveDate) -> String {
    if is_iso_date(value) {
        return value.to_string();
    }
    if let Some(days) = relative_days(value) {
        if let Some(date) = today.checked_sub_days(Days::new(days)) {
            return format_iso_date(date);
        }
    }
    match parse_date(value) {
        Some(date) => format_iso_date(date),
        None => value.to_string(),
    }
}

fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn try_parse_zoned(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

fn try_parse_polish_long(value: &str) -> Option<NaiveDate> {
    let caps = POLISH_LONG_DATE_REGEX.captures(value)?;
    let day: u32 = caps[1].parse().ok()?;
    let month_name = caps[2].to_lowercase();
    let month = POLISH_MONTHS
        .iter()
        .find(|(name, _)| *name == month_name)
        .map(|(_, month)| *month)?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
