//! The period navigator: a day or month field flanked by step controls.
//!
//! A navigator holds only its parsed configuration and a navigation host.
//! The current period lives in the field and is read again on every event;
//! nothing is cached between interactions.
//!
//! Interactions that cannot produce a target (empty field, unparsable step,
//! malformed value) do nothing rather than guess.

use serde::Serialize;

use crate::config::NavigatorConfig;
use crate::dispatch::{navigate, NavigationHost, TransportKind};
use crate::error::{NavError, Result};
use crate::field::InputField;

/// A navigation the controller performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Period value the navigation targets.
    pub value: String,
    /// Resolved URL.
    pub url: String,
    /// Transport that carried it.
    pub transport: TransportKind,
}

/// Parse the signed delta of a step control. A missing or blank attribute
/// means a step of zero.
pub fn parse_step(raw: Option<&str>) -> Result<i64> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(0),
        Some(s) => s
            .parse()
            .map_err(|_| NavError::InvalidStep(format!("'{s}': expected an integer"))),
    }
}

/// Whether a key press in a period field must be cancelled.
///
/// Periods are chosen with the picker or the step controls only, so typing
/// is always suppressed. This holds for any field carrying the input marker,
/// whether or not its navigator is correctly configured.
pub fn suppresses_typing() -> bool {
    true
}

/// A period field received focus: open the native picker if there is one.
pub fn open_picker<F>(field: &F) -> bool
where
    F: InputField + ?Sized,
{
    field.show_picker()
}

#[derive(Debug, Clone)]
pub struct PeriodNavigator<H> {
    config: NavigatorConfig,
    host: H,
}

impl<H: NavigationHost> PeriodNavigator<H> {
    pub fn new(config: NavigatorConfig, host: H) -> Self {
        Self { config, host }
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// A step control was activated.
    ///
    /// Moves the field's current value by the control's delta, writes the
    /// result back and navigates to it.
    pub fn step<F>(&self, field: &F, step: Option<&str>) -> Option<Navigation>
    where
        F: InputField + ?Sized,
    {
        let current = field.value();
        if current.is_empty() {
            tracing::debug!("period field is empty, ignoring step");
            return None;
        }

        let delta = parse_step(step)
            .map_err(|e| tracing::warn!(%e, "ignoring step control"))
            .ok()?;

        let next = self
            .config
            .mode
            .step(&current, delta)
            .map_err(|e| tracing::warn!(%e, mode = %self.config.mode, "cannot step period"))
            .ok()?;

        field.set_value(&next);
        Some(self.go(next))
    }

    /// The field's value was committed directly, e.g. from the native picker.
    pub fn change<F>(&self, field: &F) -> Option<Navigation>
    where
        F: InputField + ?Sized,
    {
        let value = field.value();
        if value.is_empty() {
            tracing::debug!("period field is empty, ignoring change");
            return None;
        }
        Some(self.go(value))
    }

    /// The field received focus. See [`open_picker`].
    pub fn focus<F>(&self, field: &F) -> bool
    where
        F: InputField + ?Sized,
    {
        open_picker(field)
    }

    /// See [`suppresses_typing`].
    pub fn suppress_key(&self) -> bool {
        suppresses_typing()
    }

    fn go(&self, value: String) -> Navigation {
        let url = self.config.resolve_url(&value);
        let transport = navigate(&url, self.config.partial.as_ref(), &self.host);
        Navigation {
            value,
            url,
            transport,
        }
    }
}
