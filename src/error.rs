//! Error types for store communication.

use thiserror::Error;

/// Errors from talking to the store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport failure (connection refused, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Response body was not the JSON we expected
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Invalid or missing configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl StoreError {
    /// Whether retrying the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            StoreError::Http(e) => e.is_timeout() || e.is_connect(),
            StoreError::Server { status, .. } => *status >= 500,
            StoreError::Json(_) | StoreError::Config(_) => false,
        }
    }

    /// Short description suitable for the status line.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Http(_) => "Cannot reach the store".to_string(),
            StoreError::Json(_) => "Unexpected response from the store".to_string(),
            StoreError::Server { status, .. } => {
                format!("Store returned an error ({})", status)
            }
            StoreError::Config(message) => format!("Configuration problem: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = StoreError::Server {
            status: 404,
            message: "no route".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (404): no route");
    }

    #[test]
    fn test_server_errors_retryable_only_above_500() {
        let server_err = StoreError::Server {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert!(server_err.is_retryable());

        let client_err = StoreError::Server {
            status: 401,
            message: "unauthorized".to_string(),
        };
        assert!(!client_err.is_retryable());
    }

    #[test]
    fn test_config_error_not_retryable() {
        let err = StoreError::Config("missing store URL".to_string());
        assert!(!err.is_retryable());
        assert_eq!(
            err.user_message(),
            "Configuration problem: missing store URL"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<i64>("not json").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Json(_)));
        assert!(!err.is_retryable());
        assert_eq!(err.user_message(), "Unexpected response from the store");
    }
}
