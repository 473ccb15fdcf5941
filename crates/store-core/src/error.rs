//! # Store Error Types
//!
//! Typed error handling for the storefront API.
//! Every rejection the API can produce maps onto one `StoreError` variant.

use serde_json::error::Category;
use thiserror::Error;

/// Core error type for catalog and payment operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Request body was empty (or whitespace only)
    #[error("Request body is empty")]
    EmptyBody,

    /// Request body is not syntactically valid JSON
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    /// JSON is well formed but does not match the expected shape
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Route exists but does not accept this method
    #[error("Method not allowed: {method}")]
    MethodNotAllowed { method: String },

    /// No route matches the request path
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// Response encoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::EmptyBody => 400,
            StoreError::MalformedJson(_) => 400,
            StoreError::InvalidField(_) => 400,
            StoreError::MethodNotAllowed { .. } => 405,
            StoreError::NotFound { .. } => 404,
            StoreError::Serialization(_) => 500,
        }
    }

    /// Returns true for errors caused by the client's request
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof => StoreError::MalformedJson(err.to_string()),
            Category::Data => StoreError::InvalidField(err.to_string()),
            Category::Io => StoreError::Serialization(err.to_string()),
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(StoreError::EmptyBody.status_code(), 400);
        assert_eq!(StoreError::InvalidField("amount".into()).status_code(), 400);
        assert_eq!(
            StoreError::MethodNotAllowed {
                method: "DELETE".into()
            }
            .status_code(),
            405
        );
        assert_eq!(
            StoreError::NotFound {
                path: "/invalid".into()
            }
            .status_code(),
            404
        );
        assert!(!StoreError::Serialization("boom".into()).is_client_error());
    }

    #[test]
    fn test_json_error_classification() {
        let syntax = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        assert!(matches!(StoreError::from(syntax), StoreError::MalformedJson(_)));

        let truncated = serde_json::from_str::<serde_json::Value>("{\"id\":").unwrap_err();
        assert!(matches!(StoreError::from(truncated), StoreError::MalformedJson(_)));

        let data = serde_json::from_str::<u32>("\"seven\"").unwrap_err();
        assert!(matches!(StoreError::from(data), StoreError::InvalidField(_)));
    }
}
