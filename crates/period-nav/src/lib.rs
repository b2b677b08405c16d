//! # period-nav
//!
//! Interaction logic for server-rendered work-time pages.
//!
//! Two widgets live here. The period navigator steps a day or month field
//! forward and backward and loads the matching page, either in place through
//! htmx or as a full page load. The record time input turns six typed digits
//! into `HH:MM:SS` and refuses to submit anything else.
//!
//! DOM access stays behind small traits ([`InputField`], [`NavigationHost`],
//! [`Notifier`]) so every rule in this crate runs without a browser.
//!
//! ## Modules
//!
//! - [`calendar`] — Day/month stepping with chrono rollover
//! - [`url_template`] — `{value}` / `{compact}` substitution
//! - [`time_input`] — Keystroke normalization for `HH:MM:SS`
//! - [`submit_guard`] — Record time validation at submit
//! - [`config`] — Navigator configuration from `data-nav-*` attributes
//! - [`dispatch`] — Partial update vs full page transport
//! - [`controller`] — Step / change / focus handling
//! - [`init`] — One-time binding guard
//! - [`error`] — Error types

pub mod calendar;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod field;
pub mod init;
pub mod notify;
pub mod submit_guard;
pub mod time_input;
pub mod url_template;

mod shape;
#[cfg(test)]
mod testing;

pub use calendar::{add_days, add_months, month_range, resolve_month_input, Mode};
pub use config::{NavigatorConfig, PartialUpdate, DEFAULT_SWAP};
pub use controller::{open_picker, parse_step, suppresses_typing, Navigation, PeriodNavigator};
pub use dispatch::{
    navigate, select_transport, FullPageTransport, NavigationHost, PartialUpdateTransport,
    Transport, TransportKind,
};
pub use error::NavError;
pub use field::InputField;
pub use init::InitGuard;
pub use notify::{Notifier, ToastLevel};
pub use submit_guard::{check_submission, guard_submission, Accepted, SubmitRejection};
pub use time_input::{digits_to_clock, is_canonical, normalize, record_timestamp, TimeEntry};
pub use url_template::{build_url, strip_dashes};
