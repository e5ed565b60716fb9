//! Note feed integration for the App.
//!
//! Polls the store's notes endpoint and publishes fresh notes to the
//! [`PushNotesHub`], where the order list coordinator picks them up.
//! Connection state changes are reported over the message channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::push::{PushNote, PushNotesHub};
use crate::store::StoreClient;

use super::AppMessage;

/// Start polling the notes endpoint for the given site.
///
/// The first successful poll only establishes a baseline; notes that were
/// already on the server do not get published. Every later poll publishes
/// the notes that arrived since the previous one. Fetch errors are logged
/// and polling continues, so a store restart heals on its own.
pub fn start_note_feed(
    client: Arc<StoreClient>,
    hub: PushNotesHub,
    site_id: i64,
    poll_interval: Duration,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    info!(
        "Starting note feed for site {} (poll every {:?})",
        site_id, poll_interval
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(poll_interval);
        let mut last_seen: Option<i64> = None;
        let mut connected = false;

        loop {
            ticker.tick().await;

            match client.fetch_notes(site_id, last_seen).await {
                Ok(fetched) => {
                    if !connected {
                        connected = true;
                        let _ = message_tx.send(AppMessage::NoteFeedStatus { connected: true });
                    }
                    for note in fresh_notes(fetched, &mut last_seen) {
                        debug!("Note feed delivering note {}", note.note_id);
                        hub.publish_foreground(&note);
                    }
                }
                Err(e) => {
                    warn!("Note feed poll failed: {}", e);
                    if connected {
                        connected = false;
                        let _ = message_tx.send(AppMessage::NoteFeedStatus { connected: false });
                    }
                }
            }
        }
    })
}

/// Split a fetch result into the notes that should be published.
///
/// `last_seen` of `None` means this is the baseline poll: the high-water
/// mark is recorded and nothing is published. Afterwards, only notes with
/// an ID above the mark come back, and the mark advances.
fn fresh_notes(fetched: Vec<PushNote>, last_seen: &mut Option<i64>) -> Vec<PushNote> {
    let newest = fetched.iter().map(|n| n.note_id).max();

    match *last_seen {
        None => {
            *last_seen = Some(newest.unwrap_or(0));
            Vec::new()
        }
        Some(seen) => {
            if let Some(newest) = newest {
                if newest > seen {
                    *last_seen = Some(newest);
                }
            }
            fetched.into_iter().filter(|n| n.note_id > seen).collect()
        }
    }
}
