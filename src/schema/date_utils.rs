//! Module for handling loosely-formatted genealogical dates.
//!
//! Dates in family-tree exports range from ISO dates through "1st Jan 1900"
//! to narrative values such as "about 1970" or "bef. 12 Mar 1890". Parsing
//! never fails loudly: anything that cannot be read yields `None`.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(18|19|20)\d{2}\b").expect("valid year pattern"));

static ORDINAL_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([0-9]{1,2})(st|nd|rd|th)\b").expect("valid ordinal pattern")
});

static SEPT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsept\b").expect("valid month pattern"));

static ABBREVIATION_DOT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z]{3,9})\.").expect("valid abbreviation pattern"));

static EMBEDDED_DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{1,2}) ([A-Za-z]{3,9}) ([0-9]{4})\b").expect("valid date pattern")
});

static EMBEDDED_MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z]{3,9}) ([0-9]{1,2}) ([0-9]{4})\b").expect("valid date pattern")
});

static EMBEDDED_ISO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{4})-([0-9]{2})-([0-9]{2})\b").expect("valid date pattern")
});

static EMBEDDED_MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z]{3,9}) ([0-9]{4})\b").expect("valid date pattern"));

/// Configuration for date format handling
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
    /// Look for a complete date inside qualifier text ("abt 1 Jan 1900")
    pub enable_embedded_dates: bool,
    /// Fall back to January 1 of the first 18xx/19xx/20xx year in the text
    pub enable_year_fallback: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 1970-01-15
                "%d %B %Y".to_string(), // 15 January 1970, 15 Jan 1970
                "%B %d %Y".to_string(), // January 15 1970
                "%d/%m/%Y".to_string(), // UK: 15/01/1970
                "%d-%m-%Y".to_string(), // European: 15-01-1970
                "%d.%m.%Y".to_string(), // 15.01.1970
                "%Y/%m/%d".to_string(), // 1970/01/15
                "%Y%m%d".to_string(),   // Compact: 19700115
            ],
            enable_format_detection: true,
            enable_embedded_dates: true,
            enable_year_fallback: true,
        }
    }
}

/// Tolerant parser for genealogical date text
#[derive(Debug, Clone, Default)]
pub struct DateParser {
    config: DateFormatConfig,
}

impl DateParser {
    /// Create a parser with the given format configuration
    #[must_use]
    pub fn new(config: DateFormatConfig) -> Self {
        Self { config }
    }

    /// Parse a date, falling back to the year alone
    ///
    /// Returns `None` when neither a calendar date nor a plausible year can be
    /// found; callers skip such records.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        parse_date_string(text, &self.config)
    }
}

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let cleaned = clean_date(s);
    if cleaned.is_empty() {
        return None;
    }

    if let Some(date) = parse_calendar_date(&cleaned, config) {
        return Some(date);
    }

    if config.enable_embedded_dates {
        if let Some(date) = find_embedded_date(&cleaned) {
            return Some(date);
        }
    }

    if config.enable_year_fallback {
        return extract_year(&cleaned);
    }

    None
}

/// Normalize ordinal suffixes, abbreviations, punctuation and spacing
#[must_use]
pub fn clean_date(s: &str) -> String {
    let s = ORDINAL_SUFFIX_REGEX.replace_all(s, "$1");
    let s = SEPT_REGEX.replace_all(&s, "Sep");
    let s = ABBREVIATION_DOT_REGEX.replace_all(&s, "$1");
    s.replace(',', " ").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether the parsed year appears in the text as four digits
///
/// chrono lets `%Y` match fewer digits, so "Jan 1970" would otherwise read
/// as "%B %d %Y" with day 19 of year 70.
fn year_written_in_full(s: &str, date: NaiveDate) -> bool {
    date.year() >= 1000 && s.contains(&date.year().to_string())
}

fn parse_with_format(s: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, format)
        .ok()
        .filter(|date| year_written_in_full(s, *date))
}

/// Parse a whole string as a conventional calendar date
fn parse_calendar_date(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    // Try all the provided formats
    for format in &config.date_formats {
        if let Some(date) = parse_with_format(s, format) {
            return Some(date);
        }
    }

    // "January 1970" means the first of the month
    if s.starts_with(|c: char| c.is_ascii_alphabetic()) {
        if let Some(date) = parse_with_format(&format!("1 {s}"), "%d %B %Y") {
            return Some(date);
        }
    }

    // If enabled, try to detect the format based on string patterns
    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Some(date) = parse_with_format(s, &detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Search qualifier text for the first complete date it contains
///
/// A month and year alone only count when the text holds no day-month-year
/// candidate; "31 Feb 1900" is left for the year fallback.
#[must_use]
pub fn find_embedded_date(s: &str) -> Option<NaiveDate> {
    let candidates: [(&Regex, &str); 3] = [
        (&EMBEDDED_DAY_MONTH_YEAR, "%d %B %Y"),
        (&EMBEDDED_MONTH_DAY_YEAR, "%B %d %Y"),
        (&EMBEDDED_ISO, "%Y-%m-%d"),
    ];
    let mut saw_full_date = false;
    for (regex, format) in candidates {
        for m in regex.find_iter(s) {
            saw_full_date = true;
            if let Some(date) = parse_with_format(m.as_str(), format) {
                return Some(date);
            }
        }
    }
    if saw_full_date {
        return None;
    }

    EMBEDDED_MONTH_YEAR
        .find_iter(s)
        .find_map(|m| parse_with_format(&format!("1 {}", m.as_str()), "%d %B %Y"))
}

/// January 1 of the first 18xx, 19xx or 20xx year in the text
#[must_use]
pub fn extract_year(s: &str) -> Option<NaiveDate> {
    let year = YEAR_REGEX.find(s)?.as_str().parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<String> {
    // Check for ISO-like format with dashes (YYYY-MM-DD)
    if s.len() == 10 && s.chars().nth(4) == Some('-') && s.chars().nth(7) == Some('-') {
        return Some("%Y-%m-%d".to_string());
    }

    // Check for slashes
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d".to_string()); // YYYY/MM/DD
            } else if parts[2].len() == 4 {
                if let (Ok(first), Ok(second)) = (parts[0].parse::<u8>(), parts[1].parse::<u8>()) {
                    // Day-first unless the second part cannot be a month
                    if second > 12 && first <= 12 {
                        return Some("%m/%d/%Y".to_string());
                    }
                    return Some("%d/%m/%Y".to_string());
                }
            }
        }
    }

    // Check for dots (DD.MM.YYYY)
    if s.contains('.') {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%d.%m.%Y".to_string());
        }
    }

    // Check for compact format (YYYYMMDD)
    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some("%Y%m%d".to_string());
    }

    // No recognized format
    None
}
