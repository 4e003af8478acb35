//! The combined contribution of one completed screen.

use super::{BehavioralBias, DecisionStyle, SignalDelta};

/// Everything a screen wants applied to the exploration state.
///
/// Produced by the choice mappers and applied in one call by
/// [`ExplorationState::apply`](super::ExplorationState::apply).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenOutcome {
    pub signals: SignalDelta,
    pub bias: BehavioralBias,
    pub decision_style: Option<DecisionStyle>,
    /// Step id appended to the completed-step log, if the screen completed.
    pub step: Option<&'static str>,
}

impl ScreenOutcome {
    /// An outcome that changes nothing and records no step.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_signals(signals: SignalDelta, step: &'static str) -> Self {
        Self {
            signals,
            step: Some(step),
            ..Self::default()
        }
    }

    pub fn with_bias(mut self, bias: BehavioralBias) -> Self {
        self.bias = bias;
        self
    }

    pub fn with_decision_style(mut self, style: DecisionStyle) -> Self {
        self.decision_style = Some(style);
        self
    }

    /// True when applying the outcome would not change any accumulator or record.
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
            && self.bias.is_zero()
            && self.decision_style.is_none()
            && self.step.is_none()
    }
}
