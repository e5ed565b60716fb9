//! Shopdeck - A terminal dashboard for a WooCommerce-style store
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod observe;
pub mod orders;
pub mod push;
pub mod settings;
pub mod store;
pub mod ui;
pub mod widgets;
