//! Error types for the gallery crates.
//!
//! This module provides a unified error type with explicit variants for
//! missing records, input validation and seed storage failures.

use thiserror::Error;

/// The unified error type for gallery operations.
///
/// Listing and filtering are total over well-typed input, so the only
/// request-level failure is [`Error::NotFound`] from a mutation. The other
/// variants cover construction-time validation and seed storage.
#[derive(Debug, Error)]
pub enum Error {
    /// A record referenced by identity is absent from the store.
    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),

    /// Input validation errors (invalid id, cursor, duplicate seed id).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Seed file read/write failures.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl Error {
    /// Short machine-readable kind, stable across releases.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "NOT_FOUND",
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::Storage(_) => "STORAGE",
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Lookup failures.
#[derive(Debug, Error)]
pub enum NotFoundError {
    /// No image has the given identity.
    #[error("image '{id}' not found")]
    Image { id: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid image identity.
    #[error("invalid image id '{value}': {reason}")]
    ImageId { value: String, reason: String },

    /// Malformed cursor token.
    #[error("invalid cursor '{value}': {reason}")]
    InvalidCursor { value: String, reason: String },

    /// Two records in a seed share an identity.
    #[error("duplicate image id '{id}'")]
    DuplicateId { id: String },
}

/// Seed storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure.
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },

    /// Seed content could not be (de)serialized.
    #[error("malformed seed data: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kind_and_message() {
        let err: Error = NotFoundError::Image {
            id: "999".to_string(),
        }
        .into();
        assert!(err.is_not_found());
        assert_eq!(err.kind(), "NOT_FOUND");
        assert_eq!(err.to_string(), "not found: image '999' not found");
    }

    #[test]
    fn json_errors_are_storage_errors() {
        let err: Error = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert_eq!(err.kind(), "STORAGE");
    }
}
