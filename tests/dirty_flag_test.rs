//! Tests for the dirty flag mechanism
//!
//! The dirty flag (`needs_redraw`) optimizes rendering by only redrawing the UI
//! when state changes occur. This test suite verifies that:
//! 1. The flag is properly set when state changes
//! 2. The flag can be cleared
//! 3. Idle ticks leave the flag alone

use std::sync::Arc;

use shopdeck::app::{App, AppMessage, Screen};
use shopdeck::config::AppConfig;
use shopdeck::models::{Order, OrderStatus};
use shopdeck::store::StoreClient;

fn test_app() -> App {
    App::new(AppConfig::default()).expect("app construction")
}

#[test]
fn test_app_initializes_with_needs_redraw_true() {
    // App should start with dirty flag set to force initial render
    let app = test_app();
    assert!(
        app.needs_redraw,
        "App should initialize with needs_redraw=true"
    );
}

#[test]
fn test_mark_dirty_sets_flag() {
    let mut app = test_app();
    // Clear the flag first
    app.needs_redraw = false;

    // Call mark_dirty
    app.mark_dirty();

    assert!(app.needs_redraw, "mark_dirty() should set needs_redraw=true");
}

#[test]
fn test_dirty_flag_can_be_cleared() {
    let mut app = test_app();
    app.needs_redraw = true;

    // Simulate the render loop clearing the flag
    app.needs_redraw = false;

    assert!(!app.needs_redraw, "Dirty flag should be clearable");
}

#[test]
fn test_tick_does_not_mark_dirty() {
    let mut app = test_app();
    app.needs_redraw = false;

    app.tick();

    assert!(
        !app.needs_redraw,
        "tick() only advances the animation counter"
    );
}

#[test]
fn test_show_product_settings_marks_dirty() {
    let mut app = test_app();
    app.needs_redraw = false;

    app.show_product_settings();

    assert!(app.needs_redraw, "Screen change should mark dirty");
    assert_eq!(app.screen, Screen::ProductSettings);
}

#[test]
fn test_show_current_screen_does_not_mark_dirty() {
    let mut app = test_app();
    app.show_product_settings();
    app.needs_redraw = false;

    // Already on the settings screen; nothing changes
    app.show_product_settings();

    assert!(
        !app.needs_redraw,
        "Re-showing the current screen should not mark dirty"
    );
}

#[test]
fn test_orders_synced_message_marks_dirty() {
    let mut app = test_app();
    app.needs_redraw = false;

    app.handle_message(AppMessage::OrdersSynced {
        orders: vec![Order::new(1, "1", OrderStatus::Processing)],
    });

    assert!(app.needs_redraw, "OrdersSynced message should mark dirty");
}

#[test]
fn test_note_feed_status_message_marks_dirty() {
    let mut app = test_app();
    app.needs_redraw = false;

    app.handle_message(AppMessage::NoteFeedStatus { connected: true });

    assert!(app.needs_redraw, "NoteFeedStatus message should mark dirty");
}

#[tokio::test]
async fn test_show_orders_marks_dirty_and_starts_sync() {
    // Returning to the orders screen kicks off a sync, so this needs a
    // runtime and a port nothing listens on.
    let client = Arc::new(StoreClient::with_url("http://127.0.0.1:59999"));
    let mut app = App::with_client(AppConfig::default(), client).expect("app construction");

    app.show_product_settings();
    app.needs_redraw = false;

    app.show_orders();

    assert!(app.needs_redraw, "show_orders() should mark dirty");
    assert_eq!(app.screen, Screen::Orders);
    assert!(app.orders_loading, "show_orders() should start a sync");
}
