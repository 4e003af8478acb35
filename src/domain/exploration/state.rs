//! ExplorationState aggregate - the single source of truth for one session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::{
    BehavioralBias, BiasKind, DecisionStyle, ExplorationContext, Intent, ScreenOutcome,
    SignalDelta, SignalKey, SignalVector,
};

/// Current schema version of the persisted document.
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Accumulated signals, biases, decision style and progress for one session.
///
/// Owned by the caller and passed by `&mut` to whatever applies a screen;
/// every mutation runs to completion under that single borrow.
///
/// Serialized as the persisted exploration document (camelCase keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationState {
    #[serde(default = "default_schema_version")]
    version: u32,
    #[serde(default)]
    intent: Option<Intent>,
    #[serde(default)]
    context: ExplorationContext,
    #[serde(default)]
    signals: SignalVector,
    #[serde(default)]
    behavioral_bias: BehavioralBias,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    decision_style: Option<DecisionStyle>,
    #[serde(default)]
    completed_steps: Vec<String>,
    #[serde(default)]
    last_updated: Timestamp,
}

impl ExplorationState {
    /// Creates a fresh session: all zero, nothing chosen.
    pub fn new() -> Self {
        Self {
            version: SCHEMA_VERSION,
            intent: None,
            context: ExplorationContext::default(),
            signals: SignalVector::zero(),
            behavioral_bias: BehavioralBias::default(),
            decision_style: None,
            completed_steps: Vec::new(),
            last_updated: Timestamp::now(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════════════════

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn intent(&self) -> Option<Intent> {
        self.intent
    }

    pub fn context(&self) -> &ExplorationContext {
        &self.context
    }

    pub fn signals(&self) -> &SignalVector {
        &self.signals
    }

    pub fn behavioral_bias(&self) -> &BehavioralBias {
        &self.behavioral_bias
    }

    pub fn decision_style(&self) -> Option<&DecisionStyle> {
        self.decision_style.as_ref()
    }

    pub fn completed_steps(&self) -> &[String] {
        &self.completed_steps
    }

    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Mutations
    // ════════════════════════════════════════════════════════════════════════════════

    /// Adds `delta` to one signal accumulator. No bounds checking.
    pub fn add_signal(&mut self, key: SignalKey, delta: f64) {
        self.signals.add(key, delta);
        self.touch();
    }

    /// Adds every present entry of `delta`.
    pub fn add_multiple_signals(&mut self, delta: &SignalDelta) {
        self.signals.apply(delta);
        self.touch();
    }

    pub fn add_behavioral_bias(&mut self, kind: BiasKind, delta: f64) {
        self.behavioral_bias.add(kind, delta);
        self.touch();
    }

    /// Merges `patch` into the decision-style record, creating it if absent.
    pub fn set_decision_style(&mut self, patch: DecisionStyle) {
        self.decision_style
            .get_or_insert_with(DecisionStyle::default)
            .merge(&patch);
        self.touch();
    }

    pub fn set_intent(&mut self, intent: Intent) {
        self.intent = Some(intent);
        self.touch();
    }

    pub fn set_work_proximity(&mut self, work_proximity: Vec<String>) {
        self.context.work_proximity = Some(work_proximity);
        self.touch();
    }

    /// Appends to the step log. Duplicates are kept.
    pub fn complete_step(&mut self, step_id: impl Into<String>) {
        self.completed_steps.push(step_id.into());
        self.touch();
    }

    /// Applies a whole screen outcome in one step.
    pub fn apply(&mut self, outcome: &ScreenOutcome) {
        self.signals.apply(&outcome.signals);
        self.behavioral_bias.merge(&outcome.bias);
        if let Some(style) = &outcome.decision_style {
            self.decision_style
                .get_or_insert_with(DecisionStyle::default)
                .merge(style);
        }
        if let Some(step) = outcome.step {
            self.completed_steps.push(step.to_string());
        }
        self.touch();
    }

    /// Restores the initial state. Used on exit.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Stamps a document read at an older schema with the current version.
    ///
    /// Older documents only lack fields, which deserialize to their defaults.
    pub(crate) fn upgrade_schema(&mut self) {
        self.version = SCHEMA_VERSION;
    }

    /// True when every field holds its initial value (timestamp aside).
    pub fn is_pristine(&self) -> bool {
        self.intent.is_none()
            && self.context == ExplorationContext::default()
            && self.signals.is_zero()
            && self.behavioral_bias.is_zero()
            && self.decision_style.is_none()
            && self.completed_steps.is_empty()
    }

    fn touch(&mut self) {
        self.last_updated = Timestamp::now();
    }
}

impl Default for ExplorationState {
    fn default() -> Self {
        Self::new()
    }
}
