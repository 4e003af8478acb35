//! Messy inbox game - rank which messages you would answer first.
//!
//! Each message feeds a primary and an optional secondary target. Targets are
//! either a signal or one of the behavioral biases. A message's contribution
//! is scaled by the slot it was dropped into.

use serde::{Deserialize, Serialize};

use crate::domain::exploration::{
    BehavioralBias, BiasKind, ScreenOutcome, SignalDelta, SignalKey,
};
use crate::domain::foundation::ValidationError;

pub const MESSY_INBOX_STEP: &str = "messy-inbox-game";

/// Base contribution of a message's primary target.
pub const PRIMARY_BASE: f64 = 2.0;
/// Base contribution of a message's secondary target.
pub const SECONDARY_BASE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InboxMessage {
    ClientEscalation,
    DataReport,
    TeammateHelp,
    LeadershipUpdate,
    ProcessReminder,
    LearningOpportunity,
}

/// Where a message's weight lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboxTarget {
    Signal(SignalKey),
    Bias(BiasKind),
}

impl InboxMessage {
    pub const ALL: [InboxMessage; 6] = [
        InboxMessage::ClientEscalation,
        InboxMessage::DataReport,
        InboxMessage::TeammateHelp,
        InboxMessage::LeadershipUpdate,
        InboxMessage::ProcessReminder,
        InboxMessage::LearningOpportunity,
    ];

    pub fn sender(&self) -> &'static str {
        match self {
            InboxMessage::ClientEscalation => "Paying Client",
            InboxMessage::DataReport => "Analytics System",
            InboxMessage::TeammateHelp => "Colleague",
            InboxMessage::LeadershipUpdate => "Manager",
            InboxMessage::ProcessReminder => "Internal Tool",
            InboxMessage::LearningOpportunity => "Newsletter",
        }
    }

    pub fn primary(&self) -> InboxTarget {
        use InboxTarget::Signal;
        match self {
            InboxMessage::ClientEscalation | InboxMessage::TeammateHelp => Signal(SignalKey::Social),
            InboxMessage::DataReport => Signal(SignalKey::Analytical),
            InboxMessage::LeadershipUpdate | InboxMessage::ProcessReminder => {
                Signal(SignalKey::Structured)
            }
            InboxMessage::LearningOpportunity => Signal(SignalKey::Exploratory),
        }
    }

    pub fn secondary(&self) -> Option<InboxTarget> {
        use InboxTarget::{Bias, Signal};
        Some(match self {
            InboxMessage::ClientEscalation | InboxMessage::ProcessReminder => {
                Bias(BiasKind::ExecutionBias)
            }
            InboxMessage::DataReport => Signal(SignalKey::Structured),
            InboxMessage::TeammateHelp => Bias(BiasKind::EmpathyBias),
            InboxMessage::LeadershipUpdate | InboxMessage::LearningOpportunity => {
                Signal(SignalKey::Analytical)
            }
        })
    }
}

/// One of the three ranked drop slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankedSlot {
    First,
    Second,
    Third,
}

impl RankedSlot {
    pub const ALL: [RankedSlot; 3] = [RankedSlot::First, RankedSlot::Second, RankedSlot::Third];

    pub fn multiplier(&self) -> f64 {
        match self {
            RankedSlot::First => 1.5,
            RankedSlot::Second => 1.2,
            RankedSlot::Third => 1.0,
        }
    }

    /// Slot from its 1-based position.
    pub fn from_position(position: u8) -> Result<Self, ValidationError> {
        match position {
            1 => Ok(RankedSlot::First),
            2 => Ok(RankedSlot::Second),
            3 => Ok(RankedSlot::Third),
            other => Err(ValidationError::out_of_range("slot", 1, 3, i32::from(other))),
        }
    }

    fn index(&self) -> usize {
        match self {
            RankedSlot::First => 0,
            RankedSlot::Second => 1,
            RankedSlot::Third => 2,
        }
    }
}

/// The player's ranking: each slot holds at most one message and a message
/// occupies at most one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InboxRanking {
    slots: [Option<InboxMessage>; 3],
}

impl InboxRanking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops `message` into `slot`, moving it out of any slot it held before.
    pub fn place(&mut self, message: InboxMessage, slot: RankedSlot) {
        for held in self.slots.iter_mut() {
            if *held == Some(message) {
                *held = None;
            }
        }
        self.slots[slot.index()] = Some(message);
    }

    pub fn with(mut self, message: InboxMessage, slot: RankedSlot) -> Self {
        self.place(message, slot);
        self
    }

    pub fn remove(&mut self, slot: RankedSlot) -> Option<InboxMessage> {
        self.slots[slot.index()].take()
    }

    pub fn get(&self, slot: RankedSlot) -> Option<InboxMessage> {
        self.slots[slot.index()]
    }

    /// Filled slots in rank order.
    pub fn placed(&self) -> impl Iterator<Item = (RankedSlot, InboxMessage)> + '_ {
        RankedSlot::ALL
            .iter()
            .filter_map(move |slot| self.get(*slot).map(|message| (*slot, message)))
    }
}

fn credit(target: InboxTarget, amount: f64, signals: &mut SignalDelta, bias: &mut BehavioralBias) {
    match target {
        InboxTarget::Signal(key) => signals.add(key, amount),
        InboxTarget::Bias(kind) => bias.add(kind, amount),
    }
}

/// Scores the ranking: base weight times slot multiplier per target.
pub fn map_messy_inbox(ranking: &InboxRanking) -> ScreenOutcome {
    let mut signals = SignalDelta::new();
    let mut bias = BehavioralBias::default();

    for (slot, message) in ranking.placed() {
        let multiplier = slot.multiplier();
        credit(message.primary(), PRIMARY_BASE * multiplier, &mut signals, &mut bias);
        if let Some(secondary) = message.secondary() {
            credit(secondary, SECONDARY_BASE * multiplier, &mut signals, &mut bias);
        }
    }

    tracing::debug!(
        ?signals,
        execution_bias = bias.execution_bias,
        empathy_bias = bias.empathy_bias,
        "Inbox game result"
    );

    ScreenOutcome::from_signals(signals, MESSY_INBOX_STEP).with_bias(bias)
}
