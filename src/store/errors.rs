//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
///
/// Unreadable document contents are not errors: they are repaired on load.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("I/O error on {document}: {message}")]
    Io { document: String, message: String },

    #[error("Failed to encode {document}: {message}")]
    Encode { document: String, message: String },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub fn io(document: &str, err: impl std::fmt::Display) -> Self {
        StoreError::Io {
            document: document.to_string(),
            message: err.to_string(),
        }
    }

    /// Store failures are always server-side
    pub fn status_code(&self) -> u16 {
        500
    }
}
