//! Error types for the bank bridge service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::MSG_INTERNAL_SERVER;

// == Bank Error Enum ==
/// Unified error type for the bank bridge service.
#[derive(Error, Debug)]
pub enum BankError {
    /// A numeric query parameter could not be parsed
    #[error("Invalid query parameter '{name}': {value:?}")]
    InvalidParameter { name: &'static str, value: String },

    /// Dataset does not fit in the configured cache capacity
    #[error("Cache full: {0}")]
    CacheFull(String),

    /// Dataset or source map could not be read from disk
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Dataset or source map is not valid JSON for its shape
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Source map entry that does not map a name to a URL string
    #[error("Invalid remote source: {0}")]
    InvalidSource(String),

    /// Remote source could not be reached or timed out
    #[error("Error fetching bank data from {url}: {source}")]
    RemoteFetch { url: String, source: reqwest::Error },

    /// Remote source answered with a body that is not a bank record
    #[error("Invalid bank data from {url}: {source}")]
    RemoteDecode {
        url: String,
        source: serde_json::Error,
    },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for BankError {
    fn into_response(self) -> Response {
        // Clients only ever see the fixed message
        error!("Error processing request: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "application/json")],
            MSG_INTERNAL_SERVER,
        )
            .into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the bank bridge service.
pub type Result<T> = std::result::Result<T, BankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_is_internal_error() {
        let err = BankError::InvalidParameter {
            name: "page",
            value: "abc".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_remote_decode_message_names_url() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = BankError::RemoteDecode {
            url: "http://localhost:1234/rbf".to_string(),
            source,
        };
        assert!(err.to_string().contains("http://localhost:1234/rbf"));
    }
}
