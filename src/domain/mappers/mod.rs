//! Choice-to-signal mappers - one module per scored quiz screen.
//!
//! Every mapper is a pure function from a typed answer to a
//! [`ScreenOutcome`](crate::domain::exploration::ScreenOutcome). Tables are
//! immutable statics kept apart from the ranking engine.
//!
//! # Screens
//!
//! - `energy` - energizing / draining sort (supports negative deltas)
//! - `priorities` - pick up to two
//! - `work_frequency` - often / sometimes / rarely per activity
//! - `messy_inbox` - ranked slots with position multipliers
//! - `advice_voices` - chosen/avoided voice plus decision style
//! - `abstract_shapes`, `situational_choices` - order-independent card pairs
//!
//! A two-card pair missing from its table contributes nothing, logs a
//! warning, and does not block navigation.

pub mod abstract_shapes;
pub mod advice_voices;
pub mod combination;
pub mod energy;
pub mod messy_inbox;
pub mod priorities;
pub mod situational_choices;
pub mod work_frequency;

pub use abstract_shapes::{map_abstract_shapes, ShapeCard, ShapeCombination};
pub use advice_voices::{map_advice_voices, AdviceAnswer, Reflection, Voice};
pub use combination::{CardPair, CombinationTable};
pub use energy::{map_energy, EnergyCard, EnergyZone};
pub use messy_inbox::{map_messy_inbox, InboxMessage, InboxRanking, InboxTarget, RankedSlot};
pub use priorities::{map_priorities, PriorityOption};
pub use situational_choices::{map_situational_choices, ChoiceCard, ChoiceCombination};
pub use work_frequency::{map_work_frequency, Frequency, WorkActivity};
