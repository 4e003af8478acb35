//! Exploration module - the signal store for one quiz session.
//!
//! # Domain Invariants
//!
//! 1. All six signal keys are always present (default 0)
//! 2. Accumulation is additive only; the final value for a key is the sum
//!    of every delta applied to it, regardless of grouping
//! 3. Behavioral biases never feed into cluster ranking
//! 4. Decision style is last-write-wins per attribute
//! 5. The completed-step log is append-only and may contain duplicates
//! 6. `reset` returns every field to its initial value

mod bias;
mod decision_style;
mod intent;
mod outcome;
mod signal;
mod state;

pub use bias::{BehavioralBias, BiasKind};
pub use decision_style::{AuthorityBias, DecisionMode, DecisionStyle, RiskTolerance};
pub use intent::{ExplorationContext, Intent};
pub use outcome::ScreenOutcome;
pub use signal::{SignalDelta, SignalKey, SignalVector};
pub use state::{ExplorationState, SCHEMA_VERSION};
