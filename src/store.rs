//! HTTP client for the store backend.
//!
//! Wraps the store's REST API: order pages for the orders screen and the
//! notes feed that backs push delivery. All endpoints are site-scoped.

use crate::error::StoreError;
use crate::models::{Order, OrderStatus};
use crate::push::PushNote;
use chrono::{DateTime, Utc};
use reqwest::Client;

/// Default store URL for local development.
pub const DEFAULT_STORE_URL: &str = "http://localhost:8080";

/// Client for the store REST API.
pub struct StoreClient {
    /// Base URL for the store API
    pub base_url: String,
    /// Bearer token, when the store requires one
    auth_token: Option<String>,
    /// Reusable HTTP client
    client: Client,
}

impl StoreClient {
    /// Create a client pointing at the default store URL.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_STORE_URL)
    }

    /// Create a client with a custom base URL.
    pub fn with_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: None,
            client: Client::new(),
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_auth(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_string());
        self
    }

    /// Fetch one page of orders for a site.
    ///
    /// `status` narrows the page to a single order status; `before` caps
    /// the creation date (used to exclude future-dated orders).
    pub async fn fetch_orders(
        &self,
        site_id: i64,
        page_number: usize,
        page_size: usize,
        status: Option<OrderStatus>,
        before: Option<DateTime<Utc>>,
    ) -> Result<Vec<Order>, StoreError> {
        let url = format!("{}/api/sites/{}/orders", self.base_url, site_id);

        let mut query: Vec<(&str, String)> = vec![
            ("page", page_number.to_string()),
            ("per_page", page_size.to_string()),
        ];
        if let Some(status) = status {
            query.push(("status", status.as_query().to_string()));
        }
        if let Some(before) = before {
            query.push(("before", before.to_rfc3339()));
        }

        let mut request = self.client.get(&url).query(&query);
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::Server { status, message });
        }

        let body = response.text().await?;
        let orders: Vec<Order> = serde_json::from_str(&body)?;
        Ok(orders)
    }

    /// Fetch push notes for a site, newest last.
    ///
    /// Passing `since_note_id` limits the response to notes newer than
    /// that ID, which is how the feed task avoids re-delivering.
    pub async fn fetch_notes(
        &self,
        site_id: i64,
        since_note_id: Option<i64>,
    ) -> Result<Vec<PushNote>, StoreError> {
        let url = format!("{}/api/sites/{}/notes", self.base_url, site_id);

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(since) = since_note_id {
            query.push(("since", since.to_string()));
        }

        let mut request = self.client.get(&url).query(&query);
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::Server { status, message });
        }

        let body = response.text().await?;
        let notes: Vec<PushNote> = serde_json::from_str(&body)?;
        Ok(notes)
    }

    /// Check if the store API is healthy and reachable.
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        let url = format!("{}/api/health", self.base_url);

        let response = self.client.get(&url).send().await?;

        Ok(response.status().is_success())
    }
}

impl Default for StoreClient {
    fn default() -> Self {
        Self::new()
    }
}
