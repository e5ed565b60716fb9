//! Runtime configuration.
//!
//! Everything the app needs at startup comes from environment variables so
//! the binary works without a config file. `AppConfig::from_env` reads them;
//! the builder methods exist for tests and embedding.

use crate::models::OrderStatus;
use crate::orders::sync::DEFAULT_PAGE_SIZE;
use crate::store::DEFAULT_STORE_URL;

/// Default seconds between polls of the notes endpoint.
pub const DEFAULT_NOTE_POLL_SECS: u64 = 30;

/// Runtime configuration for the app.
///
/// # Example
///
/// ```ignore
/// use shopdeck::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_site_id(3)
///     .with_status_filter(Some(shopdeck::models::OrderStatus::Processing));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the store API (default: http://localhost:8080)
    pub store_url: String,
    /// Bearer token for authenticated endpoints, if the store requires one
    pub api_token: Option<String>,
    /// Site the order list and note feed are scoped to
    pub site_id: i64,
    /// When set, the order list only syncs orders with this status
    pub status_filter: Option<OrderStatus>,
    /// Orders fetched per sync
    pub page_size: usize,
    /// Whether the downloadable-files feature is on for this store
    pub downloadable_products_enabled: bool,
    /// Seconds between polls of the notes endpoint
    pub note_poll_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            api_token: None,
            site_id: 1,
            status_filter: None,
            page_size: DEFAULT_PAGE_SIZE,
            downloadable_products_enabled: false,
            note_poll_secs: DEFAULT_NOTE_POLL_SECS,
        }
    }
}

impl AppConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store base URL.
    pub fn with_store_url(mut self, url: impl Into<String>) -> Self {
        self.store_url = url.into();
        self
    }

    /// Set the API bearer token.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the site ID.
    pub fn with_site_id(mut self, site_id: i64) -> Self {
        self.site_id = site_id;
        self
    }

    /// Set or clear the order status filter.
    pub fn with_status_filter(mut self, status: Option<OrderStatus>) -> Self {
        self.status_filter = status;
        self
    }

    /// Set the sync page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Enable or disable the downloadable-files feature.
    pub fn with_downloadable_products(mut self, enabled: bool) -> Self {
        self.downloadable_products_enabled = enabled;
        self
    }

    /// Set the note poll interval in seconds.
    pub fn with_note_poll_secs(mut self, secs: u64) -> Self {
        self.note_poll_secs = secs;
        self
    }

    /// Build a config from `SHOPDECK_*` environment variables.
    ///
    /// Unset variables fall back to defaults; values that fail to parse are
    /// ignored with a warning rather than aborting startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("SHOPDECK_STORE_URL") {
            config.store_url = url;
        }
        if let Ok(token) = std::env::var("SHOPDECK_API_TOKEN") {
            if !token.is_empty() {
                config.api_token = Some(token);
            }
        }
        if let Ok(raw) = std::env::var("SHOPDECK_SITE_ID") {
            match raw.parse::<i64>() {
                Ok(site_id) => config.site_id = site_id,
                Err(_) => tracing::warn!("ignoring invalid SHOPDECK_SITE_ID: {}", raw),
            }
        }
        if let Ok(raw) = std::env::var("SHOPDECK_STATUS_FILTER") {
            match raw.parse::<OrderStatus>() {
                Ok(status) => config.status_filter = Some(status),
                Err(err) => tracing::warn!("ignoring SHOPDECK_STATUS_FILTER: {}", err),
            }
        }
        if let Ok(raw) = std::env::var("SHOPDECK_PAGE_SIZE") {
            match raw.parse::<usize>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => tracing::warn!("ignoring invalid SHOPDECK_PAGE_SIZE: {}", raw),
            }
        }
        if let Ok(raw) = std::env::var("SHOPDECK_FEATURE_DOWNLOADABLE") {
            config.downloadable_products_enabled = matches!(raw.as_str(), "1" | "true" | "yes");
        }
        if let Ok(raw) = std::env::var("SHOPDECK_NOTE_POLL_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.note_poll_secs = secs,
                _ => tracing::warn!("ignoring invalid SHOPDECK_NOTE_POLL_SECS: {}", raw),
            }
        }

        config
    }
}

/// Path of the log file, under the platform data directory.
///
/// Falls back to the current directory when no data directory exists
/// (some containers).
pub fn log_file_path() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("shopdeck")
        .join("shopdeck.log")
}
