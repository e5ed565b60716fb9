//! Resync coordinator for the order list.
//!
//! Tracks app activity through a two-state machine (active or
//! backgrounded) and requests a resync on every backgrounded-to-active
//! edge, plus on every foreground push note about a new order. The model
//! never performs the sync; it only tells its registered handler that one
//! is due.

use super::sync::{OrderSyncRequest, SyncCompletion, SyncReason};
use super::OrderListFilter;
use crate::lifecycle::{ActivitySignals, AppActivityEvent};
use crate::observe::ObservationToken;
use crate::push::{PushNoteKind, PushNotesHub};
use std::sync::{Arc, Mutex as StdMutex};

/// Callback fired when the order list should resynchronize.
pub type ResyncHandler = Box<dyn FnMut() + Send>;

/// State shared with the subscription callbacks.
struct ModelShared {
    /// Whether the app is currently in the foreground
    is_app_active: bool,
    /// Registered consumer for resync requests (single slot)
    on_should_resync: Option<ResyncHandler>,
}

impl ModelShared {
    fn request_resync(&mut self) {
        if let Some(handler) = self.on_should_resync.as_mut() {
            handler();
        }
    }
}

/// Coordinator that decides when the order list needs a refresh.
///
/// Construction does not start listening; call [`activate`] once the
/// event sources exist. Dropping the model cancels its subscriptions, so
/// a discarded model can never fire into a dead handler.
///
/// [`activate`]: OrderListModel::activate
pub struct OrderListModel {
    /// Filter every sync request carries
    filter: OrderListFilter,
    shared: Arc<StdMutex<ModelShared>>,
    /// Live subscription to app-activity events, when activated
    activity_token: Option<ObservationToken>,
    /// Live subscription to foreground push notes, when activated
    push_token: Option<ObservationToken>,
}

impl OrderListModel {
    /// Create a model for the given filter. Not yet listening.
    pub fn new(filter: OrderListFilter) -> Self {
        Self {
            filter,
            shared: Arc::new(StdMutex::new(ModelShared {
                is_app_active: true,
                on_should_resync: None,
            })),
            activity_token: None,
            push_token: None,
        }
    }

    /// The filter this model was constructed with.
    pub fn filter(&self) -> &OrderListFilter {
        &self.filter
    }

    /// Register the resync consumer. Last registration wins.
    ///
    /// The handler runs on whichever thread delivers the triggering
    /// event and must not call back into this model.
    pub fn set_on_should_resync(&self, handler: impl FnMut() + Send + 'static) {
        self.shared.lock().unwrap().on_should_resync = Some(Box::new(handler));
    }

    /// Start listening for app-activity transitions and push notes.
    ///
    /// A second call is a no-op; the model never double-registers its
    /// observers.
    pub fn activate(&mut self, activity: &ActivitySignals, notes: &PushNotesHub) {
        // Guard: already listening
        if self.activity_token.is_some() || self.push_token.is_some() {
            tracing::warn!("OrderListModel::activate called while already active");
            return;
        }

        let shared = Arc::clone(&self.shared);
        self.activity_token = Some(activity.subscribe(move |event| {
            let mut state = shared.lock().unwrap();
            match event {
                AppActivityEvent::WillResignActive => {
                    state.is_app_active = false;
                }
                AppActivityEvent::DidBecomeActive => {
                    // Only the backgrounded-to-active edge requests a resync
                    if state.is_app_active {
                        return;
                    }
                    state.is_app_active = true;
                    tracing::debug!("App became active again, requesting order resync");
                    state.request_resync();
                }
            }
        }));

        let shared = Arc::clone(&self.shared);
        self.push_token = Some(notes.subscribe_foreground(move |note| {
            if note.kind != PushNoteKind::StoreOrder {
                return;
            }
            tracing::debug!(
                "Store order push note received (id={}), requesting order resync",
                note.note_id
            );
            // The push path fires regardless of the activity state
            shared.lock().unwrap().request_resync();
        }));
    }

    /// Stop listening. Safe to call repeatedly or before [`activate`].
    ///
    /// [`activate`]: OrderListModel::activate
    pub fn deactivate(&mut self) {
        if let Some(mut token) = self.activity_token.take() {
            token.cancel();
        }
        if let Some(mut token) = self.push_token.take() {
            token.cancel();
        }
    }

    /// Whether the model currently holds live subscriptions.
    pub fn is_listening(&self) -> bool {
        self.activity_token.is_some() || self.push_token.is_some()
    }

    /// Whether the app is currently considered active.
    pub fn is_app_active(&self) -> bool {
        self.shared.lock().unwrap().is_app_active
    }

    /// Build the request that fetches one page of the order list.
    ///
    /// Pure: combines the stored filter with the caller's paging
    /// parameters. Execution happens in [`sync::execute`](super::sync::execute).
    pub fn sync_request(
        &self,
        site_id: i64,
        page_number: usize,
        page_size: usize,
        reason: Option<SyncReason>,
        completion: SyncCompletion,
    ) -> OrderSyncRequest {
        OrderSyncRequest {
            site_id,
            page_number,
            page_size,
            reason,
            filter: self.filter,
            completion,
        }
    }
}

impl Drop for OrderListModel {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl std::fmt::Debug for OrderListModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderListModel")
            .field("filter", &self.filter)
            .field("listening", &self.is_listening())
            .field("is_app_active", &self.is_app_active())
            .finish()
    }
}
