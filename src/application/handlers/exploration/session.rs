//! ExplorationSession - the state and current screen of one visitor.

use crate::domain::exploration::ExplorationState;
use crate::domain::flow::Screen;
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};

/// Owned by the caller and passed by `&mut` to the handlers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplorationSession {
    state: ExplorationState,
    screen: Screen,
}

impl ExplorationSession {
    /// Fresh session on the landing screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session around a restored state. Navigation always restarts at landing.
    pub fn from_state(state: ExplorationState) -> Self {
        Self {
            state,
            screen: Screen::Landing,
        }
    }

    pub fn state(&self) -> &ExplorationState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub(crate) fn state_mut(&mut self) -> &mut ExplorationState {
        &mut self.state
    }

    /// Moves to `target` if the flow allows it; the screen is unchanged on error.
    pub(crate) fn advance_to(&mut self, target: Screen) -> Result<Screen, DomainError> {
        self.screen = self.screen.transition_to(target)?;
        Ok(self.screen)
    }

    /// Steps back one screen. Signals already applied stay applied.
    pub fn go_back(&mut self) -> Result<Screen, DomainError> {
        let target = self.screen.back().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot go back from {}", self.screen),
            )
            .with_detail("screen", self.screen.as_str())
        })?;
        self.advance_to(target)
    }

    /// Returns to landing with a pristine state.
    pub(crate) fn reset(&mut self) {
        self.state.reset();
        self.screen = Screen::Landing;
    }

    pub fn is_complete(&self) -> bool {
        self.screen == Screen::Results
    }
}
