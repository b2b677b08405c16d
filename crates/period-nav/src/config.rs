//! Navigator configuration declared on the container element.
//!
//! Server templates describe each navigator with `data-nav-*` attributes.
//! [`NavigatorConfig::from_attributes`] is the one place those attributes
//! are read and defaulted; everything downstream works with typed values.
//! The same structure deserializes from JSON for tooling.

use serde::{Deserialize, Serialize};

use crate::calendar::Mode;
use crate::error::{NavError, Result};
use crate::url_template::build_url;

/// Attribute names of the navigator markup.
pub mod attr {
    /// Marks the navigator container.
    pub const CONTAINER: &str = "data-day-nav";
    /// Marks the date/month field inside the container.
    pub const INPUT: &str = "data-day-nav-input";
    /// Step control; the value is the signed delta.
    pub const STEP: &str = "data-day-nav-step";

    pub const MODE: &str = "data-nav-mode";
    pub const URL_TEMPLATE: &str = "data-nav-url-template";
    pub const HX_TARGET: &str = "data-nav-hx-target";
    pub const HX_SWAP: &str = "data-nav-hx-swap";
    pub const HX_PUSH_URL: &str = "data-nav-hx-push-url";
    pub const HX_INDICATOR: &str = "data-nav-hx-indicator";
}

/// Swap strategy used when none is declared.
pub const DEFAULT_SWAP: &str = "outerHTML";

fn default_swap() -> String {
    DEFAULT_SWAP.to_string()
}

fn default_push_url() -> bool {
    true
}

/// Options for an in-place update of part of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialUpdate {
    /// CSS selector of the region to replace.
    pub target: String,
    /// How the response replaces the target (`outerHTML`, `innerHTML`, ...).
    #[serde(default = "default_swap")]
    pub swap: String,
    /// Whether the address bar and history follow the navigation.
    #[serde(default = "default_push_url")]
    pub push_url: bool,
    /// Selector of an element shown while the request is in flight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
}

impl PartialUpdate {
    /// Options for `target` with default swap and history behavior.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            swap: default_swap(),
            push_url: default_push_url(),
            indicator: None,
        }
    }
}

/// Everything a navigator needs to turn a period value into a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    #[serde(default)]
    pub mode: Mode,
    /// Target URL with `{value}` / `{compact}` placeholders.
    pub url_template: String,
    /// Present when the navigator should update the page in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial: Option<PartialUpdate>,
}

impl NavigatorConfig {
    pub fn new(mode: Mode, url_template: impl Into<String>) -> Self {
        Self {
            mode,
            url_template: url_template.into(),
            partial: None,
        }
    }

    pub fn with_partial(mut self, partial: PartialUpdate) -> Self {
        self.partial = Some(partial);
        self
    }

    /// Build a configuration from container attributes.
    ///
    /// `attribute` returns the raw value of a named attribute, if present.
    /// Values are trimmed and blank values count as absent:
    ///
    /// - missing mode → [`Mode::Month`]
    /// - missing hx target → full-page navigation
    /// - missing swap → [`DEFAULT_SWAP`]
    /// - push-url is on unless it is exactly `false`
    ///
    /// # Errors
    ///
    /// Returns [`NavError::MissingConfig`] without a URL template and
    /// [`NavError::InvalidMode`] for a mode other than `day` / `month`.
    pub fn from_attributes<F>(attribute: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            attribute(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mode = match read(attr::MODE) {
            Some(mode) => mode.parse()?,
            None => Mode::default(),
        };

        let url_template = read(attr::URL_TEMPLATE)
            .ok_or_else(|| NavError::MissingConfig(attr::URL_TEMPLATE.to_string()))?;

        let partial = read(attr::HX_TARGET).map(|target| PartialUpdate {
            target,
            swap: read(attr::HX_SWAP).unwrap_or_else(default_swap),
            push_url: read(attr::HX_PUSH_URL).is_none_or(|v| v != "false"),
            indicator: read(attr::HX_INDICATOR),
        });

        Ok(Self {
            mode,
            url_template,
            partial,
        })
    }

    /// Resolve the URL template for `value` using this mode's compact form.
    pub fn resolve_url(&self, value: &str) -> String {
        build_url(&self.url_template, value, |v| self.mode.compact(v))
    }
}
