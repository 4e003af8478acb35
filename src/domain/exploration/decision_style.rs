//! Decision-style metadata captured by the advice voices screen.

use serde::{Deserialize, Serialize};

/// Appetite for uncertain outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTolerance {
    Low,
    MediumLow,
    MediumHigh,
    High,
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::MediumLow => write!(f, "Medium-Low"),
            Self::MediumHigh => write!(f, "Medium-High"),
            Self::High => write!(f, "High"),
        }
    }
}

/// How much weight is given to experienced voices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorityBias {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for AuthorityBias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Primary basis for making a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionMode {
    IntuitionLed,
    DataDriven,
    ExperienceDriven,
    ActionBiased,
}

impl std::fmt::Display for DecisionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntuitionLed => write!(f, "Intuition-Led"),
            Self::DataDriven => write!(f, "Data-Driven"),
            Self::ExperienceDriven => write!(f, "Experience-Driven"),
            Self::ActionBiased => write!(f, "Action-Biased"),
        }
    }
}

/// Decision-style record; every attribute is optional.
///
/// The same shape doubles as a patch: `merge` overwrites only the
/// attributes the patch carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<RiskTolerance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority_bias: Option<AuthorityBias>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_mode: Option<DecisionMode>,
}

impl DecisionStyle {
    pub fn with_risk_tolerance(mut self, value: RiskTolerance) -> Self {
        self.risk_tolerance = Some(value);
        self
    }

    pub fn with_authority_bias(mut self, value: AuthorityBias) -> Self {
        self.authority_bias = Some(value);
        self
    }

    pub fn with_decision_mode(mut self, value: DecisionMode) -> Self {
        self.decision_mode = Some(value);
        self
    }

    /// Last-write-wins merge of the attributes present in `patch`.
    pub fn merge(&mut self, patch: &DecisionStyle) {
        if patch.risk_tolerance.is_some() {
            self.risk_tolerance = patch.risk_tolerance;
        }
        if patch.authority_bias.is_some() {
            self.authority_bias = patch.authority_bias;
        }
        if patch.decision_mode.is_some() {
            self.decision_mode = patch.decision_mode;
        }
    }
}
