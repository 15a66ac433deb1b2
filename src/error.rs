// src/error.rs

//! Unified error handling for the aggregation library.

use thiserror::Error;

/// Result type alias for aggregation operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Content endpoint answered with a non-success status
    #[error("Fetch error for {endpoint}: status {status}")]
    Fetch { endpoint: String, status: u16 },

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a fetch error for a non-2xx response.
    pub fn fetch(endpoint: impl Into<String>, status: u16) -> Self {
        Self::Fetch {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error came from reaching the content source.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Fetch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_display_carries_status() {
        let err = AppError::fetch("https://example.com/api", 503);
        assert_eq!(
            err.to_string(),
            "Fetch error for https://example.com/api: status 503"
        );
        assert!(err.is_fetch());
    }

    #[test]
    fn malformed_body_is_not_fetch() {
        let err = AppError::from(serde_json::from_str::<Vec<u8>>("{").unwrap_err());
        assert!(!err.is_fetch());
        assert!(!AppError::validation("bad").is_fetch());
    }
}
