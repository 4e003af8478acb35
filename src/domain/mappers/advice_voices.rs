//! Advice voices game - whose advice do you follow, and whose do you tune out?

use serde::{Deserialize, Serialize};

use crate::domain::exploration::{
    AuthorityBias, DecisionMode, DecisionStyle, RiskTolerance, ScreenOutcome, SignalDelta,
    SignalKey,
};

pub const ADVICE_VOICES_STEP: &str = "advice-voices-game";

/// Boost for the chosen voice's signal.
pub const CHOSEN_VOICE_WEIGHT: f64 = 3.0;
/// Boost for the signal opposite the avoided voice.
pub const AVOIDED_VOICE_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Mentor,
    Peer,
    Data,
    Inner,
}

impl Voice {
    pub const ALL: [Voice; 4] = [Voice::Mentor, Voice::Peer, Voice::Data, Voice::Inner];

    pub fn title(&self) -> &'static str {
        match self {
            Voice::Mentor => "The Experienced Mentor",
            Voice::Peer => "The Peer (Same Stage as You)",
            Voice::Data => "The Data Snapshot",
            Voice::Inner => "Your Inner Voice",
        }
    }

    /// Signal boosted when this voice is chosen.
    pub fn signal_boost(&self) -> SignalKey {
        match self {
            Voice::Mentor => SignalKey::Structured,
            Voice::Peer => SignalKey::Social,
            Voice::Data => SignalKey::Analytical,
            Voice::Inner => SignalKey::Exploratory,
        }
    }

    /// Signal boosted when this voice is avoided.
    pub fn opposite_signal(&self) -> SignalKey {
        match self {
            Voice::Mentor => SignalKey::Exploratory,
            Voice::Peer => SignalKey::Structured,
            Voice::Data => SignalKey::Social,
            Voice::Inner => SignalKey::Analytical,
        }
    }

    pub fn risk_tolerance(&self) -> RiskTolerance {
        match self {
            Voice::Mentor => RiskTolerance::Low,
            Voice::Data => RiskTolerance::MediumLow,
            Voice::Peer => RiskTolerance::MediumHigh,
            Voice::Inner => RiskTolerance::High,
        }
    }

    pub fn authority_bias(&self) -> AuthorityBias {
        match self {
            Voice::Inner => AuthorityBias::Low,
            Voice::Peer | Voice::Data => AuthorityBias::Medium,
            Voice::Mentor => AuthorityBias::High,
        }
    }

    pub fn decision_mode(&self) -> DecisionMode {
        match self {
            Voice::Inner => DecisionMode::IntuitionLed,
            Voice::Data => DecisionMode::DataDriven,
            Voice::Mentor => DecisionMode::ExperienceDriven,
            Voice::Peer => DecisionMode::ActionBiased,
        }
    }

    /// Full decision-style record implied by choosing this voice.
    pub fn decision_style(&self) -> DecisionStyle {
        DecisionStyle::default()
            .with_risk_tolerance(self.risk_tolerance())
            .with_authority_bias(self.authority_bias())
            .with_decision_mode(self.decision_mode())
    }
}

/// Why the chosen voice resonated. Recorded for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reflection {
    Realistic,
    Safe,
    Instincts,
    Uncertainty,
    Confidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceAnswer {
    pub chosen: Voice,
    pub avoided: Voice,
    pub reflection: Reflection,
}

/// Maps the chosen/avoided pair to signals and a decision style.
///
/// Avoiding the chosen voice is not possible in the game; if it arrives
/// anyway the avoided half is ignored.
pub fn map_advice_voices(answer: &AdviceAnswer) -> ScreenOutcome {
    let mut signals = SignalDelta::new().with(answer.chosen.signal_boost(), CHOSEN_VOICE_WEIGHT);

    if answer.avoided == answer.chosen {
        tracing::warn!(voice = ?answer.chosen, "Avoided voice equals chosen voice, ignoring avoid");
    } else {
        signals.add(answer.avoided.opposite_signal(), AVOIDED_VOICE_WEIGHT);
    }

    let style = answer.chosen.decision_style();
    tracing::debug!(
        chosen = ?answer.chosen,
        avoided = ?answer.avoided,
        reflection = ?answer.reflection,
        ?signals,
        ?style,
        "Advice voices result"
    );

    ScreenOutcome::from_signals(signals, ADVICE_VOICES_STEP).with_decision_style(style)
}
