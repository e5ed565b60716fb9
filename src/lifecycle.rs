//! App-activity lifecycle events.
//!
//! The terminal is the host environment: losing focus backgrounds the app,
//! regaining focus foregrounds it. The event loop posts those transitions
//! to [`ActivitySignals`], and anything that cares (the order list resync
//! coordinator) subscribes.

use crate::observe::{ObservationToken, Signal};

/// A transition in app activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppActivityEvent {
    /// The app is about to move to the background (terminal lost focus)
    WillResignActive,
    /// The app returned to the foreground (terminal gained focus)
    DidBecomeActive,
}

/// Event source for app-activity transitions.
#[derive(Debug, Clone, Default)]
pub struct ActivitySignals {
    signal: Signal<AppActivityEvent>,
}

impl ActivitySignals {
    /// Create a new activity event source with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an activity event to all subscribers.
    pub fn post(&self, event: AppActivityEvent) {
        tracing::debug!("App activity event: {:?}", event);
        self.signal.emit(&event);
    }

    /// Subscribe to activity events.
    #[must_use = "dropping the token cancels the subscription"]
    pub fn subscribe(
        &self,
        callback: impl FnMut(&AppActivityEvent) + Send + 'static,
    ) -> ObservationToken {
        self.signal.subscribe(callback)
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.signal.subscriber_count()
    }
}
