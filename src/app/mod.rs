//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`AppMessage`] - Messages for async communication
//!
//! The order list lifecycle lives in [`crate::orders::OrderListModel`];
//! `App` owns one, feeds it activity and note events, and turns its resync
//! signal into actual syncs against the store.

mod handlers;
mod messages;
mod note_feed;
mod types;

pub use messages::AppMessage;
pub use note_feed::start_note_feed;
pub use types::Screen;

use std::sync::Arc;

use color_eyre::Result;
use tokio::sync::mpsc;
use tracing::debug;

use crate::config::AppConfig;
use crate::lifecycle::ActivitySignals;
use crate::models::{Order, ProductSettings, ProductType};
use crate::orders::sync::{self, SyncReason, FIRST_PAGE};
use crate::orders::{OrderListFilter, OrderListModel};
use crate::push::PushNotesHub;
use crate::store::StoreClient;

/// Main application state
pub struct App {
    /// Runtime configuration
    pub config: AppConfig,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Orders from the last successful sync, in server order
    pub orders: Vec<Order>,
    /// True while a sync is in flight
    pub orders_loading: bool,
    /// Error message from the last failed sync, cleared on success
    pub last_sync_error: Option<String>,
    /// Whether the note feed currently reaches the store
    pub note_feed_connected: bool,
    /// Order list coordinator; decides when the list went stale
    pub order_list: OrderListModel,
    /// Activity events (terminal focus) the coordinator listens to
    pub activity: ActivitySignals,
    /// Foreground note hub fed by the note feed
    pub notes_hub: PushNotesHub,
    /// Store API client (shared across async tasks)
    pub client: Arc<StoreClient>,
    /// Settings of the product shown on the settings screen
    pub product_settings: ProductSettings,
    /// Type of the product shown on the settings screen
    pub product_type: ProductType,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set on state mutations, cleared after each draw.
    pub needs_redraw: bool,
}

impl App {
    /// Create a new App instance from config.
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = StoreClient::with_url(&config.store_url);
        let client = match &config.api_token {
            Some(token) => client.with_auth(token),
            None => client,
        };
        Self::with_client(config, Arc::new(client))
    }

    /// Create a new App instance with a custom StoreClient.
    pub fn with_client(config: AppConfig, client: Arc<StoreClient>) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let activity = ActivitySignals::new();
        let notes_hub = PushNotesHub::new();

        let filter = match config.status_filter {
            Some(status) => OrderListFilter::with_status(status),
            None => OrderListFilter::default(),
        };
        let mut order_list = OrderListModel::new(filter);

        // The coordinator's resync signal lands on the message channel;
        // the event loop decides whether a sync actually runs.
        let resync_tx = message_tx.clone();
        order_list.set_on_should_resync(move || {
            let _ = resync_tx.send(AppMessage::OrdersShouldResync);
        });
        order_list.activate(&activity, &notes_hub);

        Ok(Self {
            config,
            should_quit: false,
            screen: Screen::default(),
            orders: Vec::new(),
            orders_loading: false,
            last_sync_error: None,
            note_feed_connected: false,
            order_list,
            activity,
            notes_hub,
            client,
            product_settings: ProductSettings::default(),
            product_type: ProductType::Simple,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            needs_redraw: true,
        })
    }

    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Kick off an order sync unless one is pointless right now.
    ///
    /// Syncs are skipped while the orders screen is hidden (the screen
    /// resyncs on entry anyway) and while another sync is in flight.
    pub fn resync_orders(&mut self, reason: SyncReason) {
        if self.screen != Screen::Orders {
            debug!(
                "Skipping order sync ({}): orders screen not visible",
                reason.as_str()
            );
            return;
        }
        if self.orders_loading {
            debug!(
                "Skipping order sync ({}): sync already in flight",
                reason.as_str()
            );
            return;
        }

        self.orders_loading = true;
        self.mark_dirty();

        let request = self.order_list.sync_request(
            self.config.site_id,
            FIRST_PAGE,
            self.config.page_size,
            Some(reason),
            Box::new(|err| {
                debug!("Order sync completion invoked (failed: {})", err.is_some());
            }),
        );

        let client = Arc::clone(&self.client);
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            match sync::execute(&client, request).await {
                Ok(orders) => {
                    let _ = message_tx.send(AppMessage::OrdersSynced { orders });
                }
                Err(e) => {
                    let _ = message_tx.send(AppMessage::OrdersSyncFailed {
                        error: e.user_message(),
                    });
                }
            }
        });
    }

    /// Switch to the orders screen, refreshing the list.
    pub fn show_orders(&mut self) {
        if self.screen != Screen::Orders {
            self.screen = Screen::Orders;
            self.mark_dirty();
            self.resync_orders(SyncReason::ViewOpened);
        }
    }

    /// Switch to the product settings screen.
    pub fn show_product_settings(&mut self) {
        if self.screen != Screen::ProductSettings {
            self.screen = Screen::ProductSettings;
            self.mark_dirty();
        }
    }

    /// Cycle to the next screen (Tab).
    pub fn next_screen(&mut self) {
        match self.screen.next() {
            Screen::Orders => self.show_orders(),
            Screen::ProductSettings => self.show_product_settings(),
        }
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Increment the tick counter for animations
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }
}
