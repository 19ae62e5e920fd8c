//! Error types for the explorer core.
//!
//! Only boundary failures exist here: a registry document that is not the
//! expected shape. Malformed values *inside* a record are never errors — the
//! registry's data is inconsistently typed by design, so the normalizer coerces
//! them to documented defaults instead (see [`crate::catalog`]).

use thiserror::Error;

/// Main error type for the explorer core.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The registry payload was structurally wrong (not an object, or the
    /// `data` model list was missing or not an array).
    #[error("Registry document error: {message}")]
    Document { message: String },

    /// The registry payload was not valid JSON.
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Result type alias for explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;

impl From<serde_json::Error> for ExplorerError {
    fn from(err: serde_json::Error) -> Self {
        ExplorerError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl ExplorerError {
    /// Create a document error with a human-readable message.
    pub fn document(message: impl Into<String>) -> Self {
        ExplorerError::Document {
            message: message.into(),
        }
    }

    /// Check if this error should trigger a retry.
    ///
    /// Every boundary error is retryable: a later fetch may return a
    /// well-formed document.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ExplorerError::Document { .. } | ExplorerError::Json { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExplorerError::document("payload missing model list");
        assert_eq!(
            err.to_string(),
            "Registry document error: payload missing model list"
        );
    }

    #[test]
    fn test_boundary_errors_are_retryable() {
        assert!(ExplorerError::document("not an object").is_retryable());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(ExplorerError::from(json_err).is_retryable());
    }
}
