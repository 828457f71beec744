//! Error types for pasteboard operations.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Only two situations are errors at all: the platform backend being
//! unavailable at startup, and the verification oracle failing internally.
//! Every expected per-call failure (a refused write, an unconfirmed
//! verification) is an ordinary boolean result, not an error.

use thiserror::Error;

/// Result type alias for pasteboard operations.
pub type Result<T> = std::result::Result<T, PasteboardError>;

/// Errors that can occur in pasteboard.
#[derive(Debug, Error)]
pub enum PasteboardError {
    /// No platform pasteboard backend could be loaded.
    #[error("no pasteboard backend available: {details}")]
    BackendUnavailable {
        /// What was attempted and why it failed, for each load path.
        details: String,
    },

    /// The verification oracle could not be launched or read.
    #[error("verification oracle failed: {0}")]
    Oracle(#[from] std::io::Error),

    /// The verification oracle produced output that is not valid UTF-8.
    #[error("verification oracle produced invalid UTF-8: {0}")]
    OracleEncoding(#[from] std::string::FromUtf8Error),
}

impl PasteboardError {
    /// Create a BackendUnavailable error.
    pub fn backend_unavailable(details: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            details: details.into(),
        }
    }
}
