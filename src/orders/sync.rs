//! Order sync descriptors and execution.
//!
//! [`OrderListModel::sync_request`](super::OrderListModel::sync_request)
//! produces an [`OrderSyncRequest`]; [`execute`] is the only place that
//! actually talks to the store. The split keeps the coordinator free of
//! I/O and lets tests inspect requests without a server.

use super::OrderListFilter;
use crate::error::StoreError;
use crate::models::Order;
use crate::store::StoreClient;
use chrono::Utc;

/// First page of the orders list (pages are 1-based).
pub const FIRST_PAGE: usize = 1;

/// Default number of orders fetched per page.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Why a sync was requested. Logged, never branched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncReason {
    /// User asked for a refresh (refresh keybind)
    PullToRefresh,
    /// The orders screen was just opened
    ViewOpened,
    /// A push note announced new orders
    NewOrdersPushed,
}

impl SyncReason {
    /// Stable name for log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncReason::PullToRefresh => "pull_to_refresh",
            SyncReason::ViewOpened => "view_opened",
            SyncReason::NewOrdersPushed => "new_orders_pushed",
        }
    }
}

/// Callback invoked exactly once when a sync attempt finishes.
///
/// Receives `None` on success and the error otherwise.
pub type SyncCompletion = Box<dyn FnOnce(Option<&StoreError>) + Send>;

/// Everything needed to fetch one page of the order list.
pub struct OrderSyncRequest {
    /// Site whose orders are fetched
    pub site_id: i64,
    /// 1-based page number
    pub page_number: usize,
    /// Orders per page
    pub page_size: usize,
    /// Cause of the sync, for logging
    pub reason: Option<SyncReason>,
    /// Filter the order list was constructed with
    pub filter: OrderListFilter,
    /// Completion callback, fired exactly once by [`execute`]
    pub completion: SyncCompletion,
}

impl std::fmt::Debug for OrderSyncRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderSyncRequest")
            .field("site_id", &self.site_id)
            .field("page_number", &self.page_number)
            .field("page_size", &self.page_size)
            .field("reason", &self.reason)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

/// Fetch the page described by `request` and run its completion.
///
/// A filter that excludes future orders becomes a `before=now` cutoff on
/// the wire. The completion sees the outcome before it is returned.
pub async fn execute(
    client: &StoreClient,
    request: OrderSyncRequest,
) -> Result<Vec<Order>, StoreError> {
    let reason = request
        .reason
        .map(|r| r.as_str())
        .unwrap_or("unspecified");
    tracing::info!(
        "Syncing orders (site={}, page={}, size={}, reason={})",
        request.site_id,
        request.page_number,
        request.page_size,
        reason
    );

    let before = if request.filter.includes_future_orders {
        None
    } else {
        Some(Utc::now())
    };

    let result = client
        .fetch_orders(
            request.site_id,
            request.page_number,
            request.page_size,
            request.filter.status,
            before,
        )
        .await;

    match &result {
        Ok(orders) => {
            tracing::debug!("Order sync fetched {} orders", orders.len());
        }
        Err(e) => {
            tracing::warn!("Order sync failed: {}", e);
        }
    }

    (request.completion)(result.as_ref().err());
    result
}
