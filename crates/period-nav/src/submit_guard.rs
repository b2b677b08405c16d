//! Last-line validation of the record time when the form is submitted.
//!
//! Fields can be filled programmatically without any input event, so this
//! check runs independently of [`crate::time_input::normalize`].

use thiserror::Error;

use crate::field::InputField;
use crate::notify::{Notifier, ToastLevel};
use crate::shape::is_digit_run;
use crate::time_input::{digits_to_clock, is_canonical, CLOCK_DIGITS};

/// Shown when six digits were entered but a component is out of range.
pub const OUT_OF_RANGE_MESSAGE: &str = "시간이 올바르지 않습니다. 예: 145601 (14:56:01)";

/// Shown when the value is neither `HH:MM:SS` nor six digits.
pub const FORMAT_MESSAGE: &str = "시간은 HH:MM:SS 또는 숫자 6자리(HHMMSS)로 입력하세요.";

/// Why a submission was blocked. `Display` is the user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error("{}", OUT_OF_RANGE_MESSAGE)]
    OutOfRange,

    #[error("{}", FORMAT_MESSAGE)]
    Malformed,
}

/// A submission that may go ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accepted {
    /// The field already holds a canonical time.
    Unchanged,
    /// Six digits were converted; the field must be updated to this value.
    Converted(String),
}

/// Decide whether a record time value may be submitted.
///
/// Six digits, optionally surrounded by whitespace, are converted to
/// `HH:MM:SS`. Any other value must already be a range-valid `HH:MM:SS`
/// exactly as given; surrounding whitespace is not stripped from it.
pub fn check_submission(value: &str) -> Result<Accepted, SubmitRejection> {
    let digits = value.trim();
    if is_digit_run(digits, CLOCK_DIGITS) {
        return digits_to_clock(digits)
            .map(Accepted::Converted)
            .ok_or(SubmitRejection::OutOfRange);
    }

    if is_canonical(value) {
        Ok(Accepted::Unchanged)
    } else {
        Err(SubmitRejection::Malformed)
    }
}

/// Run the submit check against `field`.
///
/// On success a converted value is written back and `true` is returned. On
/// failure the message goes to `notifier`, focus returns to the field and
/// `false` tells the caller to cancel the submission.
pub fn guard_submission<F, N>(field: &F, notifier: &N) -> bool
where
    F: InputField + ?Sized,
    N: Notifier + ?Sized,
{
    match check_submission(&field.value()) {
        Ok(Accepted::Unchanged) => true,
        Ok(Accepted::Converted(clock)) => {
            field.set_value(&clock);
            true
        }
        Err(rejection) => {
            tracing::debug!(?rejection, "blocking record time submission");
            notifier.notify(&rejection.to_string(), ToastLevel::Error);
            field.focus();
            false
        }
    }
}
