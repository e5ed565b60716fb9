//! Order list state and synchronization.
//!
//! [`OrderListModel`] decides *when* the list should refresh; it never
//! fetches anything itself. The app registers a resync handler, activates
//! the model against the lifecycle and push-note sources, and executes
//! the sync requests the model hands out (see [`sync`]).

mod list_model;
pub mod sync;

pub use list_model::{OrderListModel, ResyncHandler};

use crate::models::OrderStatus;

/// Filter applied to every order list fetch.
///
/// Fixed at model construction; changing the filter means building a new
/// model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderListFilter {
    /// Restrict the list to a single status; `None` shows everything
    pub status: Option<OrderStatus>,
    /// Whether orders dated in the future are included
    pub includes_future_orders: bool,
}

impl Default for OrderListFilter {
    fn default() -> Self {
        Self {
            status: None,
            includes_future_orders: true,
        }
    }
}

impl OrderListFilter {
    /// Filter for a single order status.
    pub fn with_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Set whether future-dated orders are included.
    pub fn with_future_orders(mut self, includes: bool) -> Self {
        self.includes_future_orders = includes;
        self
    }
}
