//! URL templates with `{value}` and `{compact}` placeholders.
//!
//! Substitution is purely textual: no percent-encoding and no check that the
//! result is a well-formed URL. Templates come from server-rendered markup
//! and are trusted.

/// Placeholder replaced by the period value as shown in the field.
pub const VALUE_TOKEN: &str = "{value}";

/// Placeholder replaced by the separator-stripped period value.
pub const COMPACT_TOKEN: &str = "{compact}";

/// Resolve `template` for `value`.
///
/// Every `{value}` is replaced first, then every `{compact}` with
/// `compact(value)`. Either token may appear any number of times, or not at
/// all.
///
/// # Examples
///
/// ```
/// use period_nav::url_template::{build_url, strip_dashes};
///
/// let url = build_url("/day/{value}?c={compact}", "2024-05-01", strip_dashes);
/// assert_eq!(url, "/day/2024-05-01?c=20240501");
/// ```
pub fn build_url<F>(template: &str, value: &str, compact: F) -> String
where
    F: Fn(&str) -> String,
{
    let compact = compact(value);
    template
        .replace(VALUE_TOKEN, value)
        .replace(COMPACT_TOKEN, &compact)
}

/// Drop every `-` from a date or month value (`2024-05-01` → `20240501`).
pub fn strip_dashes(value: &str) -> String {
    value.replace('-', "")
}
