//! DOM side of the bindings: elements, the window host and event wiring.
//!
//! Navigator listeners are delegated from the document so that navigators
//! swapped in by htmx work without rebinding. Each event finds its
//! container, parses the container's configuration and runs one
//! controller call.

use period_nav::config::attr;
use period_nav::{
    guard_submission, normalize, open_picker, suppresses_typing, InputField, NavigationHost,
    NavigatorConfig, Notifier, PartialUpdate, PeriodNavigator, ToastLevel,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

/// Marks a time input whose listeners are already installed.
const TIME_INPUT_BOUND: &str = "data-time-input-bound";

fn selector(attribute: &str) -> String {
    format!("[{attribute}]")
}

fn prop(name: &str) -> JsValue {
    JsValue::from_str(name)
}

/// Look up a callable property of `target`, if it has one.
fn method(target: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(target, &prop(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

// ── Field ───────────────────────────────────────────────────────────────────

/// An `<input>` element seen through [`InputField`].
#[derive(Debug, Clone)]
pub struct DomField(pub HtmlInputElement);

impl InputField for DomField {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&self, value: &str) {
        self.0.set_value(value);
    }

    fn focus(&self) {
        if let Err(err) = self.0.focus() {
            tracing::warn!(?err, "could not focus input");
        }
    }

    fn show_picker(&self) -> bool {
        let Some(show_picker) = method(&self.0, "showPicker") else {
            return false;
        };
        match show_picker.call0(&self.0) {
            Ok(_) => true,
            Err(err) => {
                // Browsers refuse without a user gesture.
                tracing::debug!(?err, "showPicker refused");
                false
            }
        }
    }
}

// ── Host ────────────────────────────────────────────────────────────────────

/// The browser window, with htmx when the page loaded it.
#[derive(Debug, Clone)]
pub struct WindowHost {
    window: web_sys::Window,
}

impl WindowHost {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    fn htmx(&self) -> Option<JsValue> {
        js_sys::Reflect::get(&self.window, &prop("htmx"))
            .ok()
            .filter(|htmx| htmx.is_truthy())
    }

    fn send_ajax(&self, url: &str, options: &PartialUpdate) -> Result<(), JsValue> {
        let htmx = self
            .htmx()
            .ok_or_else(|| JsValue::from_str("htmx is not loaded"))?;
        let ajax = method(&htmx, "ajax").ok_or_else(|| JsValue::from_str("htmx.ajax missing"))?;
        ajax.call3(
            &htmx,
            &prop("GET"),
            &JsValue::from_str(url),
            &ajax_options(options)?.into(),
        )?;
        Ok(())
    }
}

/// `{target, swap, pushUrl, indicator?}` as `htmx.ajax` expects it.
pub fn ajax_options(options: &PartialUpdate) -> Result<js_sys::Object, JsValue> {
    let object = js_sys::Object::new();
    js_sys::Reflect::set(&object, &prop("target"), &JsValue::from_str(&options.target))?;
    js_sys::Reflect::set(&object, &prop("swap"), &JsValue::from_str(&options.swap))?;
    js_sys::Reflect::set(&object, &prop("pushUrl"), &JsValue::from_bool(options.push_url))?;
    if let Some(indicator) = &options.indicator {
        js_sys::Reflect::set(&object, &prop("indicator"), &JsValue::from_str(indicator))?;
    }
    Ok(object)
}

impl NavigationHost for WindowHost {
    fn partial_update_available(&self) -> bool {
        self.htmx().is_some()
    }

    fn request_partial(&self, url: &str, options: &PartialUpdate) {
        if let Err(err) = self.send_ajax(url, options) {
            tracing::error!(?err, url, "htmx.ajax failed");
        }
    }

    fn assign_location(&self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            tracing::error!(?err, url, "could not navigate");
        }
    }
}

// ── Notifier ────────────────────────────────────────────────────────────────

/// Shows messages through the page's `showToast`, or `alert` without it.
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    window: web_sys::Window,
}

impl ToastNotifier {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, level: ToastLevel) {
        if let Some(show_toast) = method(&self.window, "showToast") {
            let shown = show_toast.call2(
                &self.window,
                &JsValue::from_str(message),
                &JsValue::from_str(level.as_str()),
            );
            if shown.is_ok() {
                return;
            }
        }
        tracing::warn!("showToast not available, falling back to alert()");
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::error!(?err, "alert failed");
        }
    }
}

// ── Navigator events ────────────────────────────────────────────────────────

fn event_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn container_of(element: &Element) -> Option<Element> {
    element.closest(&selector(attr::CONTAINER)).ok().flatten()
}

fn navigator_for(container: &Element) -> Option<PeriodNavigator<WindowHost>> {
    let config = NavigatorConfig::from_attributes(|name| container.get_attribute(name))
        .map_err(|e| tracing::warn!(%e, "period navigator is misconfigured"))
        .ok()?;
    Some(PeriodNavigator::new(config, WindowHost::new()?))
}

fn field_in(container: &Element) -> Option<DomField> {
    container
        .query_selector(&selector(attr::INPUT))
        .ok()
        .flatten()?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(DomField)
}

/// The period input `event` targets, judged by its marker attribute alone.
fn marked_input(event: &web_sys::Event) -> Option<HtmlInputElement> {
    let element = event_element(event)?;
    if !element.matches(&selector(attr::INPUT)).unwrap_or(false) {
        return None;
    }
    element.dyn_into::<HtmlInputElement>().ok()
}

/// The period input `event` targets, with its navigator.
fn period_input(event: &web_sys::Event) -> Option<(PeriodNavigator<WindowHost>, DomField)> {
    let input = marked_input(event)?;
    let navigator = navigator_for(&container_of(&input)?)?;
    Some((navigator, DomField(input)))
}

fn on_click(event: &web_sys::Event) -> Option<()> {
    let control = event_element(event)?
        .closest(&selector(attr::STEP))
        .ok()
        .flatten()?;
    let container = container_of(&control)?;
    let navigator = navigator_for(&container)?;
    let field = field_in(&container)?;
    let step = control.get_attribute(attr::STEP);
    navigator.step(&field, step.as_deref())?;
    Some(())
}

fn on_change(event: &web_sys::Event) -> Option<()> {
    let (navigator, field) = period_input(event)?;
    navigator.change(&field)?;
    Some(())
}

fn on_keydown(event: &web_sys::Event) -> Option<()> {
    marked_input(event)?;
    if suppresses_typing() {
        event.prevent_default();
    }
    Some(())
}

fn on_focusin(event: &web_sys::Event) -> Option<()> {
    let field = DomField(marked_input(event)?);
    open_picker(&field);
    Some(())
}

/// Install the delegated click / change / keydown / focusin listeners.
pub fn install_navigator_events() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let handlers: [(&str, fn(&web_sys::Event) -> Option<()>); 4] = [
        ("click", on_click),
        ("change", on_change),
        ("keydown", on_keydown),
        ("focusin", on_focusin),
    ];

    for (event_name, handler) in handlers {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            handler(&event);
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

// ── Record time events ──────────────────────────────────────────────────────

/// Install the input normalizer on `input` and the submit guard on its form.
///
/// Returns `false` if the element was already bound.
pub fn install_time_input(input: HtmlInputElement) -> Result<bool, JsValue> {
    if input.has_attribute(TIME_INPUT_BOUND) {
        return Ok(false);
    }
    input.set_attribute(TIME_INPUT_BOUND, "")?;

    {
        // input
        let input_clone = input.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let buffer = input_clone.value();
            let entry = normalize(&buffer);
            if entry.rewrites(&buffer) {
                input_clone.set_value(entry.value());
            }
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    if let Some(form) = input.form() {
        // submit
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let notifier = ToastNotifier::new(window);
        let field = DomField(input.clone());
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if !guard_submission(&field, &notifier) {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        tracing::warn!("time input has no form, submit guard not installed");
    }

    Ok(true)
}
