//! One-time initialization for page-level event binding.
//!
//! A script bundle can be evaluated more than once on the same page (a
//! partial swap that re-includes it, a duplicated `<script>` tag). Binding
//! document listeners twice would dispatch every navigation twice, so the
//! binding code asks an [`InitGuard`] first.

use std::sync::atomic::{AtomicBool, Ordering};

/// Grants initialization to exactly one caller.
#[derive(Debug, Default)]
pub struct InitGuard {
    done: AtomicBool,
}

impl InitGuard {
    pub const fn new() -> Self {
        Self {
            done: AtomicBool::new(false),
        }
    }

    /// Returns `true` for the first call only; that caller performs binding.
    pub fn try_begin(&self) -> bool {
        !self.done.swap(true, Ordering::AcqRel)
    }

    pub fn is_initialized(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Run `bind` if this is the first initialization.
    ///
    /// Returns whether `bind` ran to completion. An error from `bind` is
    /// propagated and releases the guard, so a later call binds again.
    pub fn run<E>(&self, bind: impl FnOnce() -> Result<(), E>) -> Result<bool, E> {
        if !self.try_begin() {
            tracing::debug!("already initialized, skipping binding");
            return Ok(false);
        }
        if let Err(err) = bind() {
            self.done.store(false, Ordering::Release);
            return Err(err);
        }
        Ok(true)
    }
}
