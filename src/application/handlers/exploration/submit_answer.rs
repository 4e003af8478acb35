//! SubmitAnswerHandler - Command handler for answering the current screen.

use std::sync::Arc;

use crate::domain::exploration::{Intent, ScreenOutcome};
use crate::domain::flow::Screen;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::mappers::{
    map_abstract_shapes, map_advice_voices, map_energy, map_messy_inbox, map_priorities,
    map_situational_choices, map_work_frequency,
};
use crate::ports::ExplorationStorage;

use super::{ExplorationSession, ScreenAnswer};

/// Command to submit an answer for the session's current screen.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub answer: ScreenAnswer,
}

/// Result of a submitted answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    /// Screen that was answered.
    pub answered: Screen,
    /// Screen the session moved to.
    pub screen: Screen,
    /// What the answer contributed to the state.
    pub outcome: ScreenOutcome,
    /// False when the state could not be written; the session still advanced.
    pub persisted: bool,
}

/// Handler for screen answers.
pub struct SubmitAnswerHandler {
    storage: Arc<dyn ExplorationStorage>,
}

impl SubmitAnswerHandler {
    pub fn new(storage: Arc<dyn ExplorationStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        session: &mut ExplorationSession,
        cmd: SubmitAnswerCommand,
    ) -> Result<SubmitAnswerResult, DomainError> {
        let answered = session.screen();

        // 1. Answer must belong to the current screen
        if !cmd.answer.fits(answered) {
            return Err(DomainError::new(
                ErrorCode::ScreenMismatch,
                format!(
                    "Answer '{}' does not belong to screen '{}'",
                    cmd.answer.kind(),
                    answered
                ),
            )
            .with_detail("screen", answered.as_str())
            .with_detail("answer", cmd.answer.kind()));
        }

        // 2. Resolve the next screen before touching state so a failure leaves both unchanged
        let intent = match &cmd.answer {
            ScreenAnswer::Intent { option_id } => Some(Intent::from_option_id(option_id)),
            _ => session.state().intent(),
        };
        let target = answered.next(intent)?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Screen '{}' has no next screen", answered),
            )
        })?;

        // 3. Apply the answer
        let outcome = Self::outcome_for(&cmd.answer);
        let state = session.state_mut();
        match cmd.answer {
            ScreenAnswer::Intent { .. } => {
                if let Some(intent) = intent {
                    state.set_intent(intent);
                }
            }
            ScreenAnswer::WorkProximity { selections } => state.set_work_proximity(selections),
            _ => {}
        }
        state.apply(&outcome);

        tracing::debug!(
            screen = %answered,
            signals = ?outcome.signals,
            step = ?outcome.step,
            "Applied screen outcome"
        );

        // 4. Persist; failure is logged and reported, never fatal
        let persisted = match self.storage.save(session.state()).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, screen = %answered, "Failed to persist exploration state");
                false
            }
        };

        // 5. Advance
        let screen = session.advance_to(target)?;
        if screen == Screen::Results {
            tracing::info!(steps = session.state().completed_steps().len(), "Exploration completed");
        }

        Ok(SubmitAnswerResult {
            answered,
            screen,
            outcome,
            persisted,
        })
    }

    fn outcome_for(answer: &ScreenAnswer) -> ScreenOutcome {
        match answer {
            ScreenAnswer::Continue
            | ScreenAnswer::Intent { .. }
            | ScreenAnswer::WorkProximity { .. } => ScreenOutcome::none(),
            ScreenAnswer::Energy { placements } => map_energy(placements),
            ScreenAnswer::Priorities { selected } => map_priorities(selected),
            ScreenAnswer::WorkFrequency { answers } => map_work_frequency(answers),
            ScreenAnswer::MessyInbox { ranking } => map_messy_inbox(ranking),
            ScreenAnswer::AdviceVoices { answer } => map_advice_voices(answer),
            ScreenAnswer::AbstractShapes { first, second } => map_abstract_shapes(*first, *second),
            ScreenAnswer::SituationalChoices { first, second } => {
                map_situational_choices(*first, *second)
            }
        }
    }
}
