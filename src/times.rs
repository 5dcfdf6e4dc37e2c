// src/times.rs - Prayer time strings ("05:30 (EST)") to absolute UTC instants
use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Display format used on detail pages: two-digit hour, two-digit minute, then
/// a parenthesized timezone abbreviation.
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}):(\d{2}) \(([A-Za-z]+)\)$").unwrap());

/// Closed table of the abbreviations the site emits, as UTC offsets in hours
/// (local = UTC + offset). No tz-database lookups; standard and daylight codes
/// are separate entries, and the caller is expected to know the region.
const TIMEZONE_OFFSETS: [(&str, i64); 10] = [
    ("UTC", 0),
    ("GMT", 0),
    ("EST", -5),
    ("EDT", -4),
    ("CST", -6),
    ("CDT", -5),
    ("MST", -7),
    ("MDT", -6),
    ("PST", -8),
    ("PDT", -7),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("time string {0:?} does not match \"HH:MM (TZ)\"")]
    Pattern(String),
    #[error("unknown timezone abbreviation {0:?}")]
    UnknownTimezone(String),
}

/// Parses a display time into an absolute instant on `reference`'s calendar
/// date. Only the time-of-day component is meaningful to callers; the date is
/// an artifact of when the scrape ran, and a conversion that crosses midnight
/// simply rolls the date over.
pub fn parse_prayer_time(
    raw: &str,
    reference: DateTime<Utc>,
) -> Result<DateTime<Utc>, TimeParseError> {
    let caps = TIME_PATTERN
        .captures(raw)
        .ok_or_else(|| TimeParseError::Pattern(raw.to_string()))?;

    // The pattern guarantees two digits, so these cannot fail.
    let hour: i64 = caps[1].parse().unwrap();
    let minute: i64 = caps[2].parse().unwrap();
    let abbrev = &caps[3];

    let offset = TIMEZONE_OFFSETS
        .iter()
        .find(|(name, _)| *name == abbrev)
        .map(|(_, hours)| *hours)
        .ok_or_else(|| TimeParseError::UnknownTimezone(abbrev.to_string()))?;

    let midnight = reference
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc();

    Ok(midnight + Duration::hours(hour - offset) + Duration::minutes(minute))
}
