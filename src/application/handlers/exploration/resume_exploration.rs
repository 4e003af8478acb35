//! ResumeExplorationHandler - Restores a saved exploration into a new session.

use std::sync::Arc;

use crate::ports::ExplorationStorage;

use super::ExplorationSession;

/// Result of a resume attempt.
#[derive(Debug, Clone)]
pub struct ResumeExplorationResult {
    pub session: ExplorationSession,
    /// True when a saved state was restored.
    pub resumed: bool,
}

/// Handler for restoring saved explorations.
pub struct ResumeExplorationHandler {
    storage: Arc<dyn ExplorationStorage>,
}

impl ResumeExplorationHandler {
    pub fn new(storage: Arc<dyn ExplorationStorage>) -> Self {
        Self { storage }
    }

    /// Loads the saved state. A missing or unreadable document starts a
    /// fresh session instead of failing.
    pub async fn handle(&self) -> ResumeExplorationResult {
        match self.storage.load().await {
            Ok(Some(state)) => {
                tracing::info!(
                    steps = state.completed_steps().len(),
                    intent = ?state.intent(),
                    "Resumed exploration"
                );
                ResumeExplorationResult {
                    session: ExplorationSession::from_state(state),
                    resumed: true,
                }
            }
            Ok(None) => {
                tracing::info!("No saved exploration, starting fresh");
                Self::fresh()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Could not restore exploration, starting fresh");
                Self::fresh()
            }
        }
    }

    fn fresh() -> ResumeExplorationResult {
        ResumeExplorationResult {
            session: ExplorationSession::new(),
            resumed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryExplorationStorage;
    use crate::domain::exploration::{ExplorationState, SignalKey};
    use crate::domain::flow::Screen;
    use crate::ports::StorageError;
    use async_trait::async_trait;

    struct NewerSchemaStorage;

    #[async_trait]
    impl ExplorationStorage for NewerSchemaStorage {
        async fn save(&self, _state: &ExplorationState) -> Result<(), StorageError> {
            Ok(())
        }

        async fn load(&self) -> Result<Option<ExplorationState>, StorageError> {
            Err(StorageError::UnsupportedVersion {
                found: 9,
                supported: 1,
            })
        }

        async fn clear(&self) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn restores_saved_state_on_landing() {
        let mut state = ExplorationState::new();
        state.add_signal(SignalKey::Creative, 4.0);
        let handler =
            ResumeExplorationHandler::new(Arc::new(InMemoryExplorationStorage::with_state(state)));

        let result = handler.handle().await;

        assert!(result.resumed);
        assert_eq!(result.session.screen(), Screen::Landing);
        assert_eq!(result.session.state().signals().get(SignalKey::Creative), 4.0);
    }

    #[tokio::test]
    async fn empty_storage_starts_fresh() {
        let handler = ResumeExplorationHandler::new(Arc::new(InMemoryExplorationStorage::new()));

        let result = handler.handle().await;

        assert!(!result.resumed);
        assert!(result.session.state().is_pristine());
    }

    #[tokio::test]
    async fn unreadable_document_starts_fresh() {
        let handler = ResumeExplorationHandler::new(Arc::new(NewerSchemaStorage));

        let result = handler.handle().await;

        assert!(!result.resumed);
        assert!(result.session.state().is_pristine());
    }
}
