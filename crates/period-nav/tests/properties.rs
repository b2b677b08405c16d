//! Property tests for calendar stepping and time normalization.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use period_nav::calendar::{add_days, add_months};
use period_nav::submit_guard::{check_submission, Accepted};
use period_nav::time_input::{digits_to_clock, is_canonical, normalize};

fn day_strategy() -> impl Strategy<Value = String> {
    // 1900-01-01 .. 2099-12-31
    (0i64..73_049).prop_map(|offset| {
        let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        (base + Duration::days(offset)).format("%Y-%m-%d").to_string()
    })
}

fn month_strategy() -> impl Strategy<Value = String> {
    (1900i32..2100, 1u32..=12).prop_map(|(y, m)| format!("{y:04}-{m:02}"))
}

proptest! {
    #[test]
    fn add_days_round_trips(date in day_strategy(), delta in -100_000i64..100_000) {
        let there = add_days(&date, delta).unwrap();
        let back = add_days(&there, -delta).unwrap();
        prop_assert_eq!(back, date);
    }

    #[test]
    fn add_days_composes(date in day_strategy(), a in -400i64..400, b in -400i64..400) {
        let stepwise = add_days(&add_days(&date, a).unwrap(), b).unwrap();
        let direct = add_days(&date, a + b).unwrap();
        prop_assert_eq!(stepwise, direct);
    }

    #[test]
    fn add_months_round_trips(month in month_strategy(), delta in -1_200i32..1_200) {
        let there = add_months(&month, delta).unwrap();
        let back = add_months(&there, -delta).unwrap();
        prop_assert_eq!(back, month);
    }

    #[test]
    fn add_months_twelve_is_one_year(month in month_strategy()) {
        let next_year = add_months(&month, 12).unwrap();
        prop_assert_eq!(&next_year[5..], &month[5..]);
        let year: i32 = month[..4].parse().unwrap();
        prop_assert_eq!(next_year[..4].parse::<i32>().unwrap(), year + 1);
    }

    #[test]
    fn normalize_is_idempotent(buffer in "[0-9: a-z-]{0,12}") {
        let once = normalize(&buffer).into_value();
        let twice = normalize(&once).into_value();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn normalize_never_exceeds_clock_width(buffer in "\\PC{0,20}") {
        let shown = normalize(&buffer).into_value();
        if shown.trim() == buffer.trim() && shown.contains(':') {
            // Untouched colon form.
            prop_assert_eq!(shown.trim().len(), 8);
        } else {
            prop_assert!(shown.len() <= 8);
        }
    }

    #[test]
    fn six_digit_conversion_matches_ranges(h in 0u32..100, m in 0u32..100, s in 0u32..100) {
        let digits = format!("{h:02}{m:02}{s:02}");
        let converted = digits_to_clock(&digits);
        let in_range = h <= 23 && m <= 59 && s <= 59;
        prop_assert_eq!(converted.is_some(), in_range);
        if let Some(clock) = converted {
            prop_assert_eq!(clock, format!("{h:02}:{m:02}:{s:02}"));
        }
    }

    #[test]
    fn submitted_values_are_canonical(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
        let digits = format!("{h:02}{m:02}{s:02}");
        match check_submission(&digits) {
            Ok(Accepted::Converted(clock)) => prop_assert!(is_canonical(&clock)),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }
}
