//! Clock-time entry for the attendance record form.
//!
//! Users type a record time either as `HH:MM:SS` or as six bare digits
//! (`145601`). [`normalize`] runs on every input event and reformats the
//! field as digits accumulate; it never rejects partial input. Range errors
//! on a complete six-digit value are left visible and caught later by
//! [`crate::submit_guard`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{NavError, Result};
use crate::shape::{has_shape, is_digit_run};

/// `HH:MM:SS` with two digits per component.
pub const CLOCK_SHAPE: &str = "##:##:##";

/// Digits needed for a complete `HHMMSS` entry.
pub const CLOCK_DIGITS: usize = 6;

const CLOCK_FORMAT: &str = "%H:%M:%S";
const COMPACT_DAY_FORMAT: &str = "%Y%m%d";

/// What a time field should display after an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeEntry {
    /// Already colon-separated; the buffer is left exactly as it was.
    Complete(String),
    /// Six in-range digits rewritten as `HH:MM:SS`.
    Formatted(String),
    /// Fewer than six digits typed so far.
    Pending(String),
    /// Six digits with an hour, minute or second out of range, shown raw.
    OutOfRange(String),
}

impl TimeEntry {
    pub fn value(&self) -> &str {
        match self {
            TimeEntry::Complete(v)
            | TimeEntry::Formatted(v)
            | TimeEntry::Pending(v)
            | TimeEntry::OutOfRange(v) => v,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            TimeEntry::Complete(v)
            | TimeEntry::Formatted(v)
            | TimeEntry::Pending(v)
            | TimeEntry::OutOfRange(v) => v,
        }
    }

    /// Whether the field content changes as a result of this entry.
    pub fn rewrites(&self, buffer: &str) -> bool {
        self.value() != buffer
    }
}

/// Reformat the current content of a time field.
///
/// - A buffer already shaped `HH:MM:SS` (ignoring surrounding whitespace)
///   is returned untouched.
/// - Otherwise non-digits are dropped and the run is cut to six digits.
/// - Six digits in range become `HH:MM:SS`; out of range they stay raw.
/// - Fewer than six digits stay as the raw run.
///
/// # Examples
///
/// ```
/// use period_nav::time_input::{normalize, TimeEntry};
///
/// assert_eq!(normalize("145601"), TimeEntry::Formatted("14:56:01".into()));
/// assert_eq!(normalize("996001"), TimeEntry::OutOfRange("996001".into()));
/// assert_eq!(normalize("14:5"), TimeEntry::Pending("145".into()));
/// ```
pub fn normalize(buffer: &str) -> TimeEntry {
    if has_shape(buffer.trim(), CLOCK_SHAPE) {
        return TimeEntry::Complete(buffer.to_string());
    }

    let digits: String = buffer
        .chars()
        .filter(char::is_ascii_digit)
        .take(CLOCK_DIGITS)
        .collect();

    if digits.len() < CLOCK_DIGITS {
        return TimeEntry::Pending(digits);
    }

    match digits_to_clock(&digits) {
        Some(clock) => TimeEntry::Formatted(clock),
        None => TimeEntry::OutOfRange(digits),
    }
}

/// Convert exactly six digits `HHMMSS` to `HH:MM:SS`, or `None` when the
/// input is not six digits or a component is out of range.
pub fn digits_to_clock(digits: &str) -> Option<String> {
    parse_digits(digits).map(|t| t.format(CLOCK_FORMAT).to_string())
}

/// Parse six digits `HHMMSS` into a time of day.
pub fn parse_digits(digits: &str) -> Option<NaiveTime> {
    if !is_digit_run(digits, CLOCK_DIGITS) {
        return None;
    }
    let hour: u32 = digits[0..2].parse().ok()?;
    let minute: u32 = digits[2..4].parse().ok()?;
    let second: u32 = digits[4..6].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Parse a canonical `HH:MM:SS` value, range-checked.
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    if !has_shape(value, CLOCK_SHAPE) {
        return None;
    }
    let digits: String = value.chars().filter(|c| *c != ':').collect();
    parse_digits(&digits)
}

/// Whether `value` is exactly `HH:MM:SS` with hours 00–23 and minutes and
/// seconds 00–59.
pub fn is_canonical(value: &str) -> bool {
    parse_clock(value).is_some()
}

/// Combine a compact day (`YYYYMMDD`) with a canonical record time into the
/// stored timestamp.
///
/// # Errors
///
/// Returns [`NavError::InvalidDate`] for a bad day and
/// [`NavError::InvalidTime`] for a time that is not canonical.
pub fn record_timestamp(compact_day: &str, time: &str) -> Result<NaiveDateTime> {
    if !is_digit_run(compact_day, 8) {
        return Err(NavError::InvalidDate(format!(
            "'{compact_day}': expected YYYYMMDD"
        )));
    }
    let date = NaiveDate::parse_from_str(compact_day, COMPACT_DAY_FORMAT)
        .map_err(|e| NavError::InvalidDate(format!("'{compact_day}': {e}")))?;
    let time = parse_clock(time)
        .ok_or_else(|| NavError::InvalidTime(format!("'{time}': expected HH:MM:SS")))?;
    Ok(date.and_time(time))
}
