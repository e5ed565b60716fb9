//! AppMessage enum for async communication within the application.

use crate::models::Order;

/// Messages received from async operations (order syncs, the note feed)
/// and from the order list coordinator.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The order list coordinator decided the list is stale
    OrdersShouldResync,
    /// An order sync finished successfully
    OrdersSynced { orders: Vec<Order> },
    /// An order sync failed
    OrdersSyncFailed { error: String },
    /// The note feed connected or lost the store
    NoteFeedStatus { connected: bool },
}
