//! Browser bindings for period-nav.
//!
//! Call [`init`] once after the module loads to activate every period
//! navigator on the page, and [`bind_time_input`] for each record time
//! field. The pure functions are exported as well for pages that want to
//! drive the widgets themselves.

mod dom;

use std::fmt::Display;

use period_nav::submit_guard::{check_submission, Accepted};
use period_nav::{InitGuard, Mode};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use dom::{
    ajax_options, install_navigator_events, install_time_input, DomField, ToastNotifier,
    WindowHost,
};

static INIT: InitGuard = InitGuard::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn to_js(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Bind the document-level navigator listeners.
///
/// Returns `true` if this call did the binding and `false` if the module
/// had already been initialized. A failed call can be retried.
#[wasm_bindgen]
pub fn init() -> Result<bool, JsValue> {
    INIT.run(|| {
        console_error_panic_hook::set_once();
        if tracing_wasm::try_set_as_global_default().is_err() {
            tracing::debug!("a global subscriber is already installed");
        }
        install_navigator_events()
    })
}

/// Attach the record time normalizer and submit guard to the input with
/// id `input_id`.
///
/// Returns `false` when there is no such input or it is already bound.
#[wasm_bindgen(js_name = bindTimeInput)]
pub fn bind_time_input(input_id: &str) -> Result<bool, JsValue> {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(input_id))
    else {
        return Ok(false);
    };
    let input = element.dyn_into::<web_sys::HtmlInputElement>()?;
    install_time_input(input)
}

#[wasm_bindgen(js_name = addDays)]
pub fn add_days(date: &str, delta: i32) -> Result<String, JsValue> {
    period_nav::add_days(date, delta.into()).map_err(to_js)
}

#[wasm_bindgen(js_name = addMonths)]
pub fn add_months(month: &str, delta: i32) -> Result<String, JsValue> {
    period_nav::add_months(month, delta).map_err(to_js)
}

/// Step `value` by `delta` in `mode` (`"day"` or `"month"`).
#[wasm_bindgen(js_name = stepPeriod)]
pub fn step_period(mode: &str, value: &str, delta: i32) -> Result<String, JsValue> {
    let mode: Mode = mode.parse().map_err(to_js)?;
    mode.step(value, delta.into()).map_err(to_js)
}

/// Resolve a navigator URL template with dash-stripped `{compact}`.
#[wasm_bindgen(js_name = buildUrl)]
pub fn build_url(template: &str, value: &str) -> String {
    period_nav::build_url(template, value, period_nav::strip_dashes)
}

/// What a record time field should show after an input event.
#[wasm_bindgen(js_name = normalizeTime)]
pub fn normalize_time(buffer: &str) -> String {
    period_nav::normalize(buffer).into_value()
}

/// The stored timestamp (`YYYY-MM-DD HH:MM:SS`) for a compact day and a
/// canonical record time.
#[wasm_bindgen(js_name = recordTimestamp)]
pub fn record_timestamp(compact_day: &str, time: &str) -> Result<String, JsValue> {
    period_nav::record_timestamp(compact_day, time)
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .map_err(to_js)
}

/// The value to submit for a record time, or the user-facing message.
#[wasm_bindgen(js_name = checkTime)]
pub fn check_time(value: &str) -> Result<String, JsValue> {
    match check_submission(value).map_err(to_js)? {
        Accepted::Unchanged => Ok(value.to_string()),
        Accepted::Converted(clock) => Ok(clock),
    }
}
