//! Message handling for the App.

use tracing::{debug, warn};

use crate::orders::sync::SyncReason;

use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message.
    ///
    /// All message handlers mark the app as dirty since they update
    /// visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::OrdersShouldResync => {
                debug!("Order list coordinator requested a resync");
                self.resync_orders(SyncReason::NewOrdersPushed);
            }
            AppMessage::OrdersSynced { orders } => {
                debug!("Order sync delivered {} orders", orders.len());
                self.orders_loading = false;
                self.last_sync_error = None;
                self.orders = orders;
            }
            AppMessage::OrdersSyncFailed { error } => {
                warn!("Order sync failed: {}", error);
                self.orders_loading = false;
                self.last_sync_error = Some(error);
            }
            AppMessage::NoteFeedStatus { connected } => {
                if connected {
                    debug!("Note feed connected");
                } else {
                    warn!("Note feed lost the store");
                }
                self.note_feed_connected = connected;
            }
        }
    }
}
