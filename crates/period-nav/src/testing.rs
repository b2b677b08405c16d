//! In-memory stand-ins for DOM collaborators, shared by unit tests.

use std::cell::{Cell, RefCell};

use crate::config::PartialUpdate;
use crate::dispatch::NavigationHost;
use crate::field::InputField;
use crate::notify::{Notifier, ToastLevel};

#[derive(Debug, Default)]
pub(crate) struct MockField {
    pub value: RefCell<String>,
    pub focused: Cell<u32>,
    pub picker: bool,
    pub pickers_opened: Cell<u32>,
}

impl MockField {
    pub fn new(value: &str) -> Self {
        Self {
            value: RefCell::new(value.to_string()),
            ..Default::default()
        }
    }

    pub fn with_picker(value: &str) -> Self {
        Self {
            picker: true,
            ..Self::new(value)
        }
    }

    pub fn current(&self) -> String {
        self.value.borrow().clone()
    }
}

impl InputField for MockField {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }

    fn focus(&self) {
        self.focused.set(self.focused.get() + 1);
    }

    fn show_picker(&self) -> bool {
        if self.picker {
            self.pickers_opened.set(self.pickers_opened.get() + 1);
        }
        self.picker
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    pub messages: RefCell<Vec<(String, ToastLevel)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, level: ToastLevel) {
        self.messages.borrow_mut().push((message.to_string(), level));
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub partial_client: bool,
    pub requests: RefCell<Vec<(String, PartialUpdate)>>,
    pub locations: RefCell<Vec<String>>,
}

impl RecordingHost {
    pub fn with_partial_client() -> Self {
        Self {
            partial_client: true,
            ..Default::default()
        }
    }
}

impl NavigationHost for RecordingHost {
    fn partial_update_available(&self) -> bool {
        self.partial_client
    }

    fn request_partial(&self, url: &str, options: &PartialUpdate) {
        self.requests
            .borrow_mut()
            .push((url.to_string(), options.clone()));
    }

    fn assign_location(&self, url: &str) {
        self.locations.borrow_mut().push(url.to_string());
    }
}
