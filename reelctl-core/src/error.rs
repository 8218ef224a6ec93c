//! Structured error types for reelctl-core.
//!
//! The pagination calculator itself never fails; these cover the
//! surrounding record loading, validation and configuration.
//! The CLI wraps them in `anyhow` for context.

use std::io;
use thiserror::Error;

/// Main error type for reelctl-core operations
#[derive(Error, Debug)]
pub enum ReelError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Page size must be at least 1
    #[error("Page size must be a positive integer")]
    InvalidPageSize,

    /// Username rejected by local validation
    #[error("Invalid username: {reason}")]
    InvalidUsername { reason: String },

    /// No list entry carries the requested id
    #[error("No item with id {id}")]
    ItemNotFound { id: i64 },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for reelctl-core operations
pub type Result<T> = std::result::Result<T, ReelError>;

impl ReelError {
    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    pub fn invalid_username(reason: impl Into<String>) -> Self {
        Self::InvalidUsername {
            reason: reason.into(),
        }
    }

    pub fn item_not_found(id: i64) -> Self {
        Self::ItemNotFound { id }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
