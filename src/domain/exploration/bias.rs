//! Behavioral bias accumulators (informational, not used for ranking).

use serde::{Deserialize, Serialize};

/// Which bias accumulator a contribution targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BiasKind {
    ExecutionBias,
    EmpathyBias,
}

/// Execution and empathy accumulators.
///
/// Also used as the bias part of a screen outcome, where it holds deltas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralBias {
    #[serde(default)]
    pub execution_bias: f64,
    #[serde(default)]
    pub empathy_bias: f64,
}

impl BehavioralBias {
    pub fn get(&self, kind: BiasKind) -> f64 {
        match kind {
            BiasKind::ExecutionBias => self.execution_bias,
            BiasKind::EmpathyBias => self.empathy_bias,
        }
    }

    pub fn add(&mut self, kind: BiasKind, delta: f64) {
        match kind {
            BiasKind::ExecutionBias => self.execution_bias += delta,
            BiasKind::EmpathyBias => self.empathy_bias += delta,
        }
    }

    /// Adds both accumulators of `other` into this one.
    pub fn merge(&mut self, other: &BehavioralBias) {
        self.execution_bias += other.execution_bias;
        self.empathy_bias += other.empathy_bias;
    }

    pub fn is_zero(&self) -> bool {
        self.execution_bias == 0.0 && self.empathy_bias == 0.0
    }
}
