//! Boundary to the toast presenter.
//!
//! Rendering toasts belongs to the host page; the core only decides what to
//! say and how severe it is.

use serde::{Deserialize, Serialize};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Level name as the presenter expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
        }
    }
}

/// Something that can show a message to the user.
pub trait Notifier {
    fn notify(&self, message: &str, level: ToastLevel);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, level: ToastLevel) {
        (**self).notify(message, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        assert_eq!(ToastLevel::Error.as_str(), "error");
        assert_eq!(ToastLevel::default().as_str(), "info");
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&ToastLevel::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
