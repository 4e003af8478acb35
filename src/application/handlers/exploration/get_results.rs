//! GetResultsHandler - Query handler for the ranked cluster view.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::exploration::{BehavioralBias, DecisionStyle, ExplorationState, SignalKey};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ranking::{layout_bubbles, Bubble, ClusterRanker, RankedCluster, RankingOptions};
use crate::ports::ExplorationStorage;

/// Everything the results screen shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationResults {
    pub ranked: Vec<RankedCluster>,
    pub bubbles: Vec<Bubble>,
    pub strongest_signal: Option<SignalKey>,
    pub behavioral_bias: BehavioralBias,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_style: Option<DecisionStyle>,
}

/// Handler for ranking a session's signals.
pub struct GetResultsHandler {
    storage: Arc<dyn ExplorationStorage>,
    options: RankingOptions,
}

impl GetResultsHandler {
    pub fn new(storage: Arc<dyn ExplorationStorage>, options: RankingOptions) -> Self {
        Self { storage, options }
    }

    /// Ranks the persisted exploration.
    ///
    /// # Errors
    /// `ExplorationNotFound` when nothing has been saved, `StorageError`
    /// when the saved document cannot be read.
    pub async fn handle(&self) -> Result<ExplorationResults, DomainError> {
        let state = self.storage.load().await?.ok_or_else(|| {
            DomainError::new(ErrorCode::ExplorationNotFound, "No saved exploration found")
        })?;

        Ok(self.results_for(&state))
    }

    /// Ranks an in-memory state.
    pub fn results_for(&self, state: &ExplorationState) -> ExplorationResults {
        let ranked = ClusterRanker::with_options(self.options).rank(state.signals());
        let bubbles = layout_bubbles(&ranked);

        tracing::debug!(
            top = ranked.first().map(|r| r.cluster.as_str()),
            clusters = ranked.len(),
            "Ranked clusters"
        );

        ExplorationResults {
            ranked,
            bubbles,
            strongest_signal: state.signals().strongest(),
            behavioral_bias: *state.behavioral_bias(),
            decision_style: state.decision_style().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryExplorationStorage;

    fn handler_with(storage: InMemoryExplorationStorage) -> GetResultsHandler {
        GetResultsHandler::new(Arc::new(storage), RankingOptions::default())
    }

    #[tokio::test]
    async fn ranks_saved_state() {
        let mut state = ExplorationState::new();
        state.add_signal(SignalKey::Analytical, 6.0);
        state.add_signal(SignalKey::Structured, 3.0);
        state.add_signal(SignalKey::Social, 1.0);

        let results = handler_with(InMemoryExplorationStorage::with_state(state))
            .handle()
            .await
            .unwrap();

        assert_eq!(results.ranked[0].cluster, "Data & Insights");
        assert_eq!(results.bubbles.len(), 4);
        assert_eq!(results.strongest_signal, Some(SignalKey::Analytical));
    }

    #[tokio::test]
    async fn missing_exploration_is_not_found() {
        let err = handler_with(InMemoryExplorationStorage::new())
            .handle()
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ExplorationNotFound);
    }

    #[test]
    fn pristine_state_still_produces_four_bubbles() {
        let results =
            handler_with(InMemoryExplorationStorage::new()).results_for(&ExplorationState::new());

        assert_eq!(results.bubbles.len(), 4);
        assert_eq!(results.strongest_signal, None);
        assert!(results.decision_style.is_none());
    }
}
