//! Situational choices game - "which two approaches feel like you?"

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::exploration::{ScreenOutcome, SignalDelta, SignalKey};

use super::combination::CombinationTable;

pub const SITUATIONAL_CHOICES_STEP: &str = "situational-choices-game";

/// Weight added to each signal of the chosen combination.
pub const CHOICE_SIGNAL_WEIGHT: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChoiceCard {
    /// You research before acting
    A,
    /// You experiment quickly
    B,
    /// You ask people first
    C,
    /// You create a rough draft
    D,
}

impl ChoiceCard {
    pub const ALL: [ChoiceCard; 4] = [ChoiceCard::A, ChoiceCard::B, ChoiceCard::C, ChoiceCard::D];

    pub fn text(&self) -> &'static str {
        match self {
            ChoiceCard::A => "You research before acting",
            ChoiceCard::B => "You experiment quickly",
            ChoiceCard::C => "You ask people first",
            ChoiceCard::D => "You create a rough draft",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceCombination {
    pub signals: &'static [SignalKey],
    pub meaning: &'static str,
}

static CHOICE_COMBINATIONS: Lazy<CombinationTable<ChoiceCard, ChoiceCombination>> =
    Lazy::new(|| {
        use ChoiceCard::*;
        use SignalKey::*;
        CombinationTable::from_entries([
            (A, D, ChoiceCombination { signals: &[Analytical, Creative], meaning: "Think → build" }),
            (B, D, ChoiceCombination { signals: &[Exploratory], meaning: "Try & iterate" }),
            (A, C, ChoiceCombination { signals: &[Social, Analytical], meaning: "People-informed logic" }),
            (C, D, ChoiceCombination { signals: &[Social, Creative], meaning: "Co-creation" }),
            (A, B, ChoiceCombination { signals: &[Analytical, Exploratory], meaning: "Balanced risk" }),
        ])
    });

pub fn choice_combinations() -> &'static CombinationTable<ChoiceCard, ChoiceCombination> {
    &CHOICE_COMBINATIONS
}

/// Maps a two-card selection; every signal of the combination gets the full weight.
pub fn map_situational_choices(first: ChoiceCard, second: ChoiceCard) -> ScreenOutcome {
    let Some(combination) = CHOICE_COMBINATIONS.lookup(first, second) else {
        tracing::warn!(?first, ?second, "No situational choices combination for selection");
        return ScreenOutcome::none();
    };

    tracing::debug!(
        ?first,
        ?second,
        signals = ?combination.signals,
        meaning = combination.meaning,
        "Situational choices result"
    );

    let signals = combination
        .signals
        .iter()
        .map(|key| (*key, CHOICE_SIGNAL_WEIGHT))
        .collect::<SignalDelta>();
    ScreenOutcome::from_signals(signals, SITUATIONAL_CHOICES_STEP)
}
