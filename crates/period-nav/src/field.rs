//! Boundary to a form input element.
//!
//! Controllers never cache field content: every handler calls
//! [`InputField::value`] again, so the element stays the single source of
//! truth for the current period or record time.

/// A single-line input the core reads from and writes to.
pub trait InputField {
    /// Current text content.
    fn value(&self) -> String;

    /// Replace the text content.
    fn set_value(&self, value: &str);

    /// Move keyboard focus to the field.
    fn focus(&self);

    /// Open the native date/month picker, if the host has one.
    ///
    /// Returns whether a picker was opened.
    fn show_picker(&self) -> bool {
        false
    }
}

impl<F: InputField + ?Sized> InputField for &F {
    fn value(&self) -> String {
        (**self).value()
    }

    fn set_value(&self, value: &str) {
        (**self).set_value(value)
    }

    fn focus(&self) {
        (**self).focus()
    }

    fn show_picker(&self) -> bool {
        (**self).show_picker()
    }
}
