//! ExitExplorationHandler - Command handler for leaving the quiz.

use std::sync::Arc;

use crate::ports::ExplorationStorage;

use super::ExplorationSession;

/// Result of an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitExplorationResult {
    /// False when the reset state could not be written.
    pub persisted: bool,
}

/// Handler for exits. Works from any screen.
pub struct ExitExplorationHandler {
    storage: Arc<dyn ExplorationStorage>,
}

impl ExitExplorationHandler {
    pub fn new(storage: Arc<dyn ExplorationStorage>) -> Self {
        Self { storage }
    }

    /// Resets the session to landing and saves the pristine state.
    pub async fn handle(&self, session: &mut ExplorationSession) -> ExitExplorationResult {
        let left = session.screen();
        session.reset();

        let persisted = match self.storage.save(session.state()).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to persist reset exploration state");
                false
            }
        };

        tracing::info!(screen = %left, "Exploration exited");
        ExitExplorationResult { persisted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryExplorationStorage;
    use crate::domain::exploration::SignalKey;
    use crate::domain::flow::Screen;

    #[tokio::test]
    async fn exit_resets_mid_game_session() {
        let storage = InMemoryExplorationStorage::new();
        let handler = ExitExplorationHandler::new(Arc::new(storage.clone()));
        let mut session = ExplorationSession::new();
        session.state_mut().add_signal(SignalKey::Exploratory, 5.0);
        session.state_mut().complete_step("messy-inbox-game");
        for screen in [
            Screen::Start,
            Screen::Intent,
            Screen::Attention,
            Screen::Learning,
            Screen::MessyInbox,
        ] {
            session.advance_to(screen).unwrap();
        }

        let result = handler.handle(&mut session).await;

        assert!(result.persisted);
        assert_eq!(session.screen(), Screen::Landing);
        assert!(session.state().is_pristine());
        assert!(storage.load().await.unwrap().unwrap().is_pristine());
    }

    #[tokio::test]
    async fn exit_from_landing_is_allowed() {
        let handler = ExitExplorationHandler::new(Arc::new(InMemoryExplorationStorage::new()));
        let mut session = ExplorationSession::new();

        handler.handle(&mut session).await;

        assert_eq!(session.screen(), Screen::Landing);
    }
}
