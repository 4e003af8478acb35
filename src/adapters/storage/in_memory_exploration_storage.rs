//! In-Memory Exploration Storage Adapter
//!
//! Holds the document in memory. Used by tests and the `memory` backend.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::exploration::ExplorationState;
use crate::ports::{ExplorationStorage, StorageError};

/// In-memory storage for the exploration document
#[derive(Debug, Clone, Default)]
pub struct InMemoryExplorationStorage {
    state: Arc<RwLock<Option<ExplorationState>>>,
}

impl InMemoryExplorationStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a document
    pub fn with_state(state: ExplorationState) -> Self {
        Self {
            state: Arc::new(RwLock::new(Some(state))),
        }
    }

    /// True if a document is stored
    pub async fn is_saved(&self) -> bool {
        self.state.read().await.is_some()
    }
}

#[async_trait]
impl ExplorationStorage for InMemoryExplorationStorage {
    async fn save(&self, state: &ExplorationState) -> Result<(), StorageError> {
        *self.state.write().await = Some(state.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<ExplorationState>, StorageError> {
        Ok(self.state.read().await.clone())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.state.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exploration::SignalKey;

    #[tokio::test]
    async fn starts_empty() {
        let storage = InMemoryExplorationStorage::new();
        assert!(!storage.is_saved().await);
        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_replaces_previous_document() {
        let storage = InMemoryExplorationStorage::new();
        let mut state = ExplorationState::new();
        storage.save(&state).await.unwrap();

        state.add_signal(SignalKey::Creative, 3.0);
        storage.save(&state).await.unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded.signals().get(SignalKey::Creative), 3.0);
    }

    #[tokio::test]
    async fn clones_share_the_same_document() {
        let storage = InMemoryExplorationStorage::with_state(ExplorationState::new());
        let clone = storage.clone();

        clone.clear().await.unwrap();

        assert!(!storage.is_saved().await);
    }
}
