//! Energy question - sort activities into energizing and draining.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::exploration::{ScreenOutcome, SignalDelta, SignalKey};

pub const ENERGY_STEP: &str = "energy-question";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnergyCard {
    Meetings,
    DeepFocus,
    Repetitive,
    Helping,
    Deadlines,
    Creating,
    Conflict,
}

impl EnergyCard {
    pub const ALL: [EnergyCard; 7] = [
        EnergyCard::Meetings,
        EnergyCard::DeepFocus,
        EnergyCard::Repetitive,
        EnergyCard::Helping,
        EnergyCard::Deadlines,
        EnergyCard::Creating,
        EnergyCard::Conflict,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EnergyCard::Meetings => "Meetings",
            EnergyCard::DeepFocus => "Deep focus work",
            EnergyCard::Repetitive => "Repetitive tasks",
            EnergyCard::Helping => "Helping someone understand",
            EnergyCard::Deadlines => "Managing deadlines",
            EnergyCard::Creating => "Creating something new",
            EnergyCard::Conflict => "Handling conflict",
        }
    }

    pub fn energizing_signals(&self) -> SignalDelta {
        use SignalKey::*;
        match self {
            EnergyCard::Meetings | EnergyCard::Helping => SignalDelta::new().with(Social, 2.0),
            EnergyCard::DeepFocus => SignalDelta::new().with(Analytical, 2.0),
            EnergyCard::Repetitive | EnergyCard::Deadlines => {
                SignalDelta::new().with(Structured, 2.0)
            }
            EnergyCard::Creating => SignalDelta::new().with(Creative, 2.0).with(Exploratory, 1.0),
            EnergyCard::Conflict => SignalDelta::new().with(Social, 1.0).with(Analytical, 1.0),
        }
    }

    /// Negative entries are deliberate anti-signals.
    pub fn draining_signals(&self) -> SignalDelta {
        use SignalKey::*;
        match self {
            EnergyCard::Meetings => SignalDelta::new().with(Structured, 1.0),
            EnergyCard::DeepFocus | EnergyCard::Conflict => SignalDelta::new().with(Social, -1.0),
            EnergyCard::Repetitive => SignalDelta::new().with(Exploratory, -1.0),
            EnergyCard::Helping | EnergyCard::Deadlines | EnergyCard::Creating => SignalDelta::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnergyZone {
    Energizing,
    Draining,
    #[default]
    Unassigned,
}

/// Sums the zone-specific signals of every placed card.
pub fn map_energy(placements: &BTreeMap<EnergyCard, EnergyZone>) -> ScreenOutcome {
    let mut signals = SignalDelta::new();
    for (card, zone) in placements {
        match zone {
            EnergyZone::Energizing => signals.merge(&card.energizing_signals()),
            EnergyZone::Draining => signals.merge(&card.draining_signals()),
            EnergyZone::Unassigned => {}
        }
    }
    ScreenOutcome::from_signals(signals, ENERGY_STEP)
}
