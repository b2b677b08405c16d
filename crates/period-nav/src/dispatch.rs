//! Navigation dispatch: in-place partial update or full page load.
//!
//! The transport is chosen per call from two facts: whether the navigator
//! declares a partial-update target, and whether the host page actually has
//! a partial-update client loaded. Missing the client is not an error; the
//! navigation degrades to a full page load.
//!
//! Requests are fire-and-forget. Completion, failure and races between
//! overlapping requests belong to the partial-update client.

use serde::Serialize;

use crate::config::PartialUpdate;

/// The page environment a navigation runs in.
pub trait NavigationHost {
    /// Whether a partial-update client (htmx) is loaded.
    fn partial_update_available(&self) -> bool;

    /// Issue an asynchronous GET whose response replaces `options.target`.
    fn request_partial(&self, url: &str, options: &PartialUpdate);

    /// Navigate the whole page to `url`.
    fn assign_location(&self, url: &str);
}

impl<H: NavigationHost + ?Sized> NavigationHost for &H {
    fn partial_update_available(&self) -> bool {
        (**self).partial_update_available()
    }

    fn request_partial(&self, url: &str, options: &PartialUpdate) {
        (**self).request_partial(url, options)
    }

    fn assign_location(&self, url: &str) {
        (**self).assign_location(url)
    }
}

/// Which transport carried a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    PartialUpdate,
    FullPage,
}

/// One way of delivering a navigation to the host.
pub trait Transport {
    fn kind(&self) -> TransportKind;

    fn send(&self, url: &str, host: &dyn NavigationHost);
}

/// Swap a region of the current page with the server's response.
#[derive(Debug, Clone, Copy)]
pub struct PartialUpdateTransport<'a> {
    options: &'a PartialUpdate,
}

impl<'a> PartialUpdateTransport<'a> {
    pub fn new(options: &'a PartialUpdate) -> Self {
        Self { options }
    }
}

impl Transport for PartialUpdateTransport<'_> {
    fn kind(&self) -> TransportKind {
        TransportKind::PartialUpdate
    }

    fn send(&self, url: &str, host: &dyn NavigationHost) {
        host.request_partial(url, self.options);
    }
}

/// Replace the whole page, discarding its state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullPageTransport;

impl Transport for FullPageTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::FullPage
    }

    fn send(&self, url: &str, host: &dyn NavigationHost) {
        host.assign_location(url);
    }
}

/// Pick the transport for one navigation.
pub fn select_transport<'a>(
    partial: Option<&'a PartialUpdate>,
    host: &dyn NavigationHost,
) -> Box<dyn Transport + 'a> {
    match partial {
        Some(options) if host.partial_update_available() => {
            Box::new(PartialUpdateTransport::new(options))
        }
        Some(options) => {
            tracing::debug!(
                selector = %options.target,
                "partial update client missing, falling back to full navigation"
            );
            Box::new(FullPageTransport)
        }
        None => Box::new(FullPageTransport),
    }
}

/// Navigate to `url`, in place when possible.
///
/// Performs exactly one partial request or exactly one full navigation and
/// reports which.
pub fn navigate(
    url: &str,
    partial: Option<&PartialUpdate>,
    host: &dyn NavigationHost,
) -> TransportKind {
    let transport = select_transport(partial, host);
    tracing::debug!(url, kind = ?transport.kind(), "dispatching navigation");
    transport.send(url, host);
    transport.kind()
}
