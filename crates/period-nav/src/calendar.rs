//! Calendar arithmetic for the period navigator.
//!
//! Periods travel as text because that is what native date and month inputs
//! hold: `YYYY-MM-DD` at day granularity, `YYYY-MM` at month granularity.
//! All rollover (month ends, leap Februaries, year boundaries) is delegated
//! to chrono rather than computed by hand.
//!
//! # Functions
//!
//! - [`add_days`] — Step a `YYYY-MM-DD` date by N days
//! - [`add_months`] — Step a `YYYY-MM` month by N months
//! - [`resolve_month_input`] — Accept `YYYY-MM` or `YYYYMM`, return compact form
//! - [`month_range`] — First and last day of a month
//!
//! [`Mode`] ties a granularity to its value format and compacting function.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{NavError, Result};
use crate::shape::{has_shape, is_digit_run};
use crate::url_template::strip_dashes;

const DAY_SHAPE: &str = "####-##-##";
const MONTH_SHAPE: &str = "####-##";
const DAY_FORMAT: &str = "%Y-%m-%d";
const MONTH_FORMAT: &str = "%Y-%m";

/// Largest year that still renders as four digits.
const MAX_YEAR: i32 = 9999;

// ── Mode ────────────────────────────────────────────────────────────────────

/// Granularity of a period navigator.
///
/// Anything that is not explicitly a day navigator steps by months, so
/// [`Mode::Month`] is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// `YYYY-MM-DD` values, stepped by days.
    Day,
    /// `YYYY-MM` values, stepped by months.
    #[default]
    Month,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Day => "day",
            Mode::Month => "month",
        }
    }

    /// Step `value` by `delta` periods of this granularity.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not in this mode's format, or if the
    /// result leaves the four-digit year range.
    pub fn step(&self, value: &str, delta: i64) -> Result<String> {
        match self {
            Mode::Day => add_days(value, delta),
            Mode::Month => {
                let delta = i32::try_from(delta).map_err(|_| {
                    NavError::OutOfRange(format!("month delta {delta} is too large"))
                })?;
                add_months(value, delta)
            }
        }
    }

    /// The separator-stripped form of `value` used for `{compact}` URLs.
    ///
    /// Both granularities compact the same way; the mode still owns the
    /// choice so callers never pick the function themselves.
    pub fn compact(&self, value: &str) -> String {
        strip_dashes(value)
    }

    /// Inverse of [`Mode::compact`]: `20240501` → `2024-05-01` in day mode,
    /// `202405` → `2024-05` in month mode. The result is validated.
    pub fn expand_compact(&self, compact: &str) -> Result<String> {
        let compact = compact.trim();
        match self {
            Mode::Day => {
                if !is_digit_run(compact, 8) {
                    return Err(NavError::InvalidDate(format!(
                        "'{compact}': expected YYYYMMDD"
                    )));
                }
                let value = format!("{}-{}-{}", &compact[..4], &compact[4..6], &compact[6..]);
                parse_day(&value)?;
                Ok(value)
            }
            Mode::Month => {
                if !is_digit_run(compact, 6) {
                    return Err(NavError::InvalidMonth(format!(
                        "'{compact}': expected YYYYMM"
                    )));
                }
                let value = format!("{}-{}", &compact[..4], &compact[4..]);
                parse_month(&value)?;
                Ok(value)
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("day") {
            Ok(Mode::Day)
        } else if s.eq_ignore_ascii_case("month") {
            Ok(Mode::Month)
        } else {
            Err(NavError::InvalidMode(format!("'{s}': expected 'day' or 'month'")))
        }
    }
}

// ── Stepping ────────────────────────────────────────────────────────────────

/// Step a `YYYY-MM-DD` date by `delta` days (negative steps backward).
///
/// # Errors
///
/// Returns [`NavError::InvalidDate`] if `date` is malformed or names a day
/// that does not exist, and [`NavError::OutOfRange`] if the result falls
/// outside years 0000–9999.
///
/// # Examples
///
/// ```
/// use period_nav::calendar::add_days;
///
/// assert_eq!(add_days("2024-02-28", 1).unwrap(), "2024-02-29");
/// assert_eq!(add_days("2023-02-28", 1).unwrap(), "2023-03-01");
/// ```
pub fn add_days(date: &str, delta: i64) -> Result<String> {
    let start = parse_day(date)?;
    let shifted = if delta >= 0 {
        start.checked_add_days(Days::new(delta.unsigned_abs()))
    } else {
        start.checked_sub_days(Days::new(delta.unsigned_abs()))
    };
    shifted
        .filter(in_year_range)
        .map(|d| d.format(DAY_FORMAT).to_string())
        .ok_or_else(|| NavError::OutOfRange(format!("'{date}' {delta:+} days")))
}

/// Step a `YYYY-MM` month by `delta` months, anchored to the first day.
///
/// # Errors
///
/// Returns [`NavError::InvalidMonth`] if `month` is malformed, and
/// [`NavError::OutOfRange`] if the result falls outside years 0000–9999.
///
/// # Examples
///
/// ```
/// use period_nav::calendar::add_months;
///
/// assert_eq!(add_months("2024-12", 1).unwrap(), "2025-01");
/// assert_eq!(add_months("2024-03", -4).unwrap(), "2023-11");
/// ```
pub fn add_months(month: &str, delta: i32) -> Result<String> {
    let start = parse_month(month)?;
    let shifted = if delta >= 0 {
        start.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        start.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted
        .filter(in_year_range)
        .map(|d| d.format(MONTH_FORMAT).to_string())
        .ok_or_else(|| NavError::OutOfRange(format!("'{month}' {delta:+} months")))
}

// ── Month helpers ───────────────────────────────────────────────────────────

/// Normalize a month query value to its compact `YYYYMM` form.
///
/// Accepts `YYYY-MM` or `YYYYMM` (surrounding whitespace ignored). Returns
/// `None` for anything else, including an empty value.
pub fn resolve_month_input(value: &str) -> Option<String> {
    let v = value.trim();
    if has_shape(v, MONTH_SHAPE) {
        return Some(strip_dashes(v));
    }
    if is_digit_run(v, 6) {
        return Some(v.to_string());
    }
    None
}

/// First and last calendar day of a `YYYY-MM` month.
pub fn month_range(month: &str) -> Result<(NaiveDate, NaiveDate)> {
    let first = parse_month(month)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| NavError::OutOfRange(format!("'{month}' has no last day")))?;
    Ok((first, last))
}

// ── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a strict `YYYY-MM-DD` value.
pub fn parse_day(value: &str) -> Result<NaiveDate> {
    if !has_shape(value, DAY_SHAPE) {
        return Err(NavError::InvalidDate(format!(
            "'{value}': expected YYYY-MM-DD"
        )));
    }
    NaiveDate::parse_from_str(value, DAY_FORMAT)
        .map_err(|e| NavError::InvalidDate(format!("'{value}': {e}")))
}

/// Parse a strict `YYYY-MM` value into the first day of that month.
pub fn parse_month(value: &str) -> Result<NaiveDate> {
    if !has_shape(value, MONTH_SHAPE) {
        return Err(NavError::InvalidMonth(format!("'{value}': expected YYYY-MM")));
    }
    // Shape guarantees ASCII digits at these positions.
    let year: i32 = value[..4]
        .parse()
        .map_err(|_| NavError::InvalidMonth(format!("'{value}': bad year")))?;
    let month: u32 = value[5..]
        .parse()
        .map_err(|_| NavError::InvalidMonth(format!("'{value}': bad month")))?;
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| NavError::InvalidMonth(format!("'{value}': no such month")))
}

fn in_year_range(date: &NaiveDate) -> bool {
    (0..=MAX_YEAR).contains(&date.year())
}

// ── Tests ───────────────────────────────────────────────────────────────────
