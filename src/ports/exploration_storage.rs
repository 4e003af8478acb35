//! Exploration Storage Port - Interface for persisting the exploration document.
//!
//! One document per storage key. Saving replaces the previous document;
//! loading a key that was never saved is not an error.

use async_trait::async_trait;

use crate::domain::exploration::ExplorationState;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during exploration storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize exploration state: {0}")]
    Serialization(String),

    #[error("Failed to deserialize exploration state: {0}")]
    Deserialization(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Unsupported schema version {found}, newest supported is {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for persisting and restoring exploration state
#[async_trait]
pub trait ExplorationStorage: Send + Sync {
    /// Save the state, replacing any previous document
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails. Callers treat this as
    /// non-fatal and keep the in-memory state.
    async fn save(&self, state: &ExplorationState) -> Result<(), StorageError>;

    /// Load the saved state
    ///
    /// # Returns
    /// `None` when nothing has been saved yet
    ///
    /// # Errors
    /// Returns `StorageError::Deserialization` for a corrupt document and
    /// `StorageError::UnsupportedVersion` for one written by a newer schema
    async fn load(&self) -> Result<Option<ExplorationState>, StorageError>;

    /// Remove the saved state. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_version_names_both_versions() {
        let err = StorageError::UnsupportedVersion {
            found: 3,
            supported: 1,
        };
        let message = err.to_string();
        assert!(message.contains('3'));
        assert!(message.contains("newest supported is 1"));
    }

    #[test]
    fn converts_to_storage_domain_error() {
        let err: DomainError = StorageError::Io("disk full".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("disk full"));
    }

    #[test]
    fn serialization_error_mentions_serialize() {
        let err = StorageError::Serialization("bad float".to_string());
        assert!(err.to_string().contains("serialize"));
    }
}
