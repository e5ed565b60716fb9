//! Push notes from the store.
//!
//! The store surfaces events (new orders, new reviews) as notes. While the
//! app is running, a background feed task polls for fresh notes and
//! publishes them to the [`PushNotesHub`]; subscribers react on the spot.
//! Delivery here means "received while the app is in the foreground",
//! which is the only case a TUI ever sees.

use crate::observe::{ObservationToken, Signal};
use serde::{Deserialize, Serialize};

/// What a push note is about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PushNoteKind {
    /// A new order was placed
    StoreOrder,
    /// A new product review was submitted
    StoreReview,
    /// Any note kind this client does not handle
    #[default]
    #[serde(other)]
    Other,
}

/// A single push note as returned by the notes endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PushNote {
    /// Note ID assigned by the store, monotonically increasing
    pub note_id: i64,
    /// Site the note belongs to
    pub site_id: i64,
    /// What the note announces
    #[serde(default)]
    pub kind: PushNoteKind,
    /// Human-readable summary
    #[serde(default)]
    pub message: String,
}

impl PushNote {
    /// Create a note of the given kind.
    pub fn new(note_id: i64, site_id: i64, kind: PushNoteKind) -> Self {
        Self {
            note_id,
            site_id,
            kind,
            message: String::new(),
        }
    }

    /// Set the summary message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// Distribution point for push notes received in the foreground.
#[derive(Debug, Clone, Default)]
pub struct PushNotesHub {
    foreground: Signal<PushNote>,
}

impl PushNotesHub {
    /// Create a hub with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a note to all foreground subscribers.
    pub fn publish_foreground(&self, note: &PushNote) {
        tracing::debug!(
            "Publishing foreground push note (id={}, kind={:?})",
            note.note_id,
            note.kind
        );
        self.foreground.emit(note);
    }

    /// Subscribe to foreground notes.
    #[must_use = "dropping the token cancels the subscription"]
    pub fn subscribe_foreground(
        &self,
        callback: impl FnMut(&PushNote) + Send + 'static,
    ) -> ObservationToken {
        self.foreground.subscribe(callback)
    }

    /// Number of live foreground subscriptions.
    pub fn foreground_count(&self) -> usize {
        self.foreground.subscriber_count()
    }
}
