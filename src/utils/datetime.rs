//! Parsing and display of show start times.
//!
//! Start times are naive local timestamps; no time zone is attached.

use chrono::{Duration, NaiveDateTime, Timelike};

/// Accepted input formats, tried in order.
const INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Value for an HTML `datetime-local` input.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parses a start time typed into the show form.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS]` and `YYYY-MM-DD HH:MM[:SS]`.
pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Rounds up to the next whole minute; whole minutes are returned unchanged.
pub fn ceil_to_minute(value: NaiveDateTime) -> NaiveDateTime {
    if value.second() == 0 && value.nanosecond() == 0 {
        return value;
    }
    let truncated = value
        .with_second(0)
        .and_then(|v| v.with_nanosecond(0))
        .unwrap_or(value);
    truncated + Duration::minutes(1)
}

/// `"Mon Jun 10, 2024 7:00PM"`
pub fn format_medium(value: &NaiveDateTime) -> String {
    value.format("%a %b %-d, %Y %-I:%M%p").to_string()
}

/// `"Monday June 10, 2024 at 7:00PM"`
pub fn format_full(value: &NaiveDateTime) -> String {
    value.format("%A %B %-d, %Y at %-I:%M%p").to_string()
}
