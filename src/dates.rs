//! Calendar arithmetic shared by the date tools.
//!
//! Every date that crosses a tool boundary is a strict `YYYY-MM-DD` string,
//! and a week is always the seven days starting on Monday.

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, WeekwiseError};

/// Format string for all tool-facing dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Full English weekday names, Monday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Parse a strict `YYYY-MM-DD` date string.
///
/// Anything else, including real-looking strings such as `2025-02-30`,
/// `07/08/2025`, or `+2025-07-08`, is rejected with
/// [`WeekwiseError::InvalidDateFormat`]. There is no best-effort recovery
/// of other formats.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    // chrono's %Y also accepts signed years and leading whitespace; the
    // tool-facing grammar is ASCII digits and dashes only, which caps the
    // year at 4 digits and keeps week arithmetic inside calendar bounds
    if input.starts_with('-') || !input.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return Err(WeekwiseError::InvalidDateFormat(input.to_string()));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| WeekwiseError::InvalidDateFormat(input.to_string()))
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The Monday of the week containing `date`.
///
/// A Monday maps to itself; a Sunday maps six days back.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// All seven days of the week containing `date`, Monday first
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = monday_of_week(date);
    std::array::from_fn(|i| monday + chrono::Duration::days(i as i64))
}

/// Full English weekday name for `date`
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_monday() as usize]
}
