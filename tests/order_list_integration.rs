//! Order list coordination integration tests.
//!
//! These tests verify the complete resync pipeline:
//! - Focus transitions posted to ActivitySignals surface as app messages
//! - Foreground store-order notes surface as app messages
//! - Handling a resync message ends in OrdersSynced / OrdersSyncFailed
//! - The note feed drives the same pipeline end to end

use std::sync::Arc;
use std::time::Duration;

use shopdeck::app::{start_note_feed, App, AppMessage};
use shopdeck::config::AppConfig;
use shopdeck::lifecycle::AppActivityEvent;
use shopdeck::models::OrderStatus;
use shopdeck::push::{PushNote, PushNoteKind};
use shopdeck::store::StoreClient;
use tokio::sync::mpsc::error::TryRecvError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Helpers
// ============================================================================

/// App wired to a port nothing listens on; good for tests that never
/// reach the network.
fn offline_app() -> App {
    let client = Arc::new(StoreClient::with_url("http://127.0.0.1:59999"));
    App::with_client(AppConfig::default(), client).expect("app construction")
}

/// App pointed at a wiremock server.
fn app_against(server: &MockServer, config: AppConfig) -> App {
    let client = Arc::new(StoreClient::with_url(&server.uri()));
    App::with_client(config, client).expect("app construction")
}

fn order_note(id: i64) -> PushNote {
    PushNote::new(id, 1, PushNoteKind::StoreOrder)
}

// ============================================================================
// Coordinator Wiring - Events Become Messages
// ============================================================================

#[test]
fn test_focus_cycle_surfaces_resync_message() {
    let mut app = offline_app();
    let mut rx = app.message_rx.take().expect("receiver present");

    // Losing focus alone produces nothing
    app.activity.post(AppActivityEvent::WillResignActive);
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

    // Regaining it completes the edge and requests a resync
    app.activity.post(AppActivityEvent::DidBecomeActive);
    match rx.try_recv() {
        Ok(AppMessage::OrdersShouldResync) => {}
        other => panic!("Expected OrdersShouldResync, got {:?}", other),
    }

    // Exactly one message per edge
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn test_focus_gain_without_loss_is_silent() {
    let mut app = offline_app();
    let mut rx = app.message_rx.take().expect("receiver present");

    app.activity.post(AppActivityEvent::DidBecomeActive);
    app.activity.post(AppActivityEvent::DidBecomeActive);

    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn test_push_note_while_backgrounded_still_signals() {
    let mut app = offline_app();
    let mut rx = app.message_rx.take().expect("receiver present");

    app.activity.post(AppActivityEvent::WillResignActive);
    app.notes_hub.publish_foreground(&order_note(1));

    // The push path does not wait for the app to come back
    match rx.try_recv() {
        Ok(AppMessage::OrdersShouldResync) => {}
        other => panic!("Expected OrdersShouldResync, got {:?}", other),
    }

    // And the pending foreground edge still fires on its own
    app.activity.post(AppActivityEvent::DidBecomeActive);
    match rx.try_recv() {
        Ok(AppMessage::OrdersShouldResync) => {}
        other => panic!("Expected OrdersShouldResync, got {:?}", other),
    }
}

#[test]
fn test_non_order_notes_do_not_signal() {
    let mut app = offline_app();
    let mut rx = app.message_rx.take().expect("receiver present");

    app.notes_hub
        .publish_foreground(&PushNote::new(2, 1, PushNoteKind::StoreReview));
    app.notes_hub
        .publish_foreground(&PushNote::new(3, 1, PushNoteKind::Other));

    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn test_deactivated_coordinator_goes_quiet() {
    let mut app = offline_app();
    let mut rx = app.message_rx.take().expect("receiver present");

    app.order_list.deactivate();

    app.activity.post(AppActivityEvent::WillResignActive);
    app.activity.post(AppActivityEvent::DidBecomeActive);
    app.notes_hub.publish_foreground(&order_note(1));

    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    assert_eq!(app.activity.subscriber_count(), 0);
    assert_eq!(app.notes_hub.foreground_count(), 0);
}

// ============================================================================
// Resync Messages Become Syncs Against the Store
// ============================================================================

#[tokio::test]
async fn test_push_note_triggers_full_resync() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sites/1/orders"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 727,
                "number": "727",
                "status": "processing",
                "total": "29.35",
                "currency": "USD",
                "date_created": "2026-03-22T16:28:02Z"
            }
        ])))
        .mount(&mock_server)
        .await;

    let mut app = app_against(&mock_server, AppConfig::default());
    let mut rx = app.message_rx.take().expect("receiver present");

    // A store-order note comes in sideways (the hub, not the channel)
    app.notes_hub.publish_foreground(&order_note(4021));

    let msg = rx.try_recv().expect("resync message queued");
    assert!(matches!(msg, AppMessage::OrdersShouldResync));

    // Handling the message starts the actual sync
    app.handle_message(msg);
    assert!(app.orders_loading);

    let outcome = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("sync finished in time")
        .expect("channel open");

    match outcome {
        AppMessage::OrdersSynced { ref orders } => {
            assert_eq!(orders.len(), 1);
            assert_eq!(orders[0].id, 727);
        }
        other => panic!("Expected OrdersSynced, got {:?}", other),
    }

    app.handle_message(outcome);
    assert!(!app.orders_loading);
    assert!(app.last_sync_error.is_none());
    assert_eq!(app.orders.len(), 1);
}

#[tokio::test]
async fn test_failed_resync_reports_error_and_keeps_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sites/1/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let mut app = app_against(&mock_server, AppConfig::default());
    let mut rx = app.message_rx.take().expect("receiver present");

    // Stale data from an earlier sync
    app.orders = vec![shopdeck::models::Order::new(
        1,
        "1",
        OrderStatus::Completed,
    )];

    app.handle_message(AppMessage::OrdersShouldResync);

    let outcome = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("sync finished in time")
        .expect("channel open");

    match outcome {
        AppMessage::OrdersSyncFailed { ref error } => {
            // resync_orders ships the user-facing form of the error
            assert!(error.contains("Store returned an error (500)"), "got: {}", error);
        }
        other => panic!("Expected OrdersSyncFailed, got {:?}", other),
    }

    app.handle_message(outcome);
    assert!(!app.orders_loading);
    assert!(app.last_sync_error.is_some());
    // The stale list survives a failed refresh
    assert_eq!(app.orders.len(), 1);
}

#[tokio::test]
async fn test_status_filter_is_sent_on_resync() {
    let mock_server = MockServer::start().await;

    // Only a request carrying the configured filter matches
    Mock::given(method("GET"))
        .and(path("/api/sites/1/orders"))
        .and(query_param("status", "processing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let config = AppConfig::default().with_status_filter(Some(OrderStatus::Processing));
    let mut app = app_against(&mock_server, config);
    let mut rx = app.message_rx.take().expect("receiver present");

    app.handle_message(AppMessage::OrdersShouldResync);

    let outcome = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("sync finished in time")
        .expect("channel open");

    // Success proves the status parameter went out on the wire
    assert!(
        matches!(outcome, AppMessage::OrdersSynced { .. }),
        "Expected OrdersSynced, got {:?}",
        outcome
    );
}

// ============================================================================
// Note Feed End to End
// ============================================================================

#[tokio::test]
async fn test_note_feed_drives_resync_pipeline() {
    let mock_server = MockServer::start().await;

    // First poll: one pre-existing note, establishes the baseline
    Mock::given(method("GET"))
        .and(path("/api/sites/1/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "note_id": 4021, "site_id": 1, "kind": "store_order" }
        ])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    // Later polls: a fresh order note on top
    Mock::given(method("GET"))
        .and(path("/api/sites/1/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "note_id": 4022, "site_id": 1, "kind": "store_order" }
        ])))
        .mount(&mock_server)
        .await;

    let mut app = app_against(&mock_server, AppConfig::default());
    let mut rx = app.message_rx.take().expect("receiver present");

    let feed = start_note_feed(
        Arc::clone(&app.client),
        app.notes_hub.clone(),
        1,
        Duration::from_millis(25),
        app.message_sender(),
    );

    // First successful poll reports the feed as connected
    let first = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("feed reported in time")
        .expect("channel open");
    assert!(
        matches!(first, AppMessage::NoteFeedStatus { connected: true }),
        "Expected connected status, got {:?}",
        first
    );

    // The baseline note is not delivered; the next poll's fresh note is,
    // and it lands as a resync request
    let second = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("resync requested in time")
        .expect("channel open");
    assert!(
        matches!(second, AppMessage::OrdersShouldResync),
        "Expected OrdersShouldResync, got {:?}",
        second
    );

    feed.abort();
}
