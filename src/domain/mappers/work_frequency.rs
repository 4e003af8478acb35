//! Work frequency question - how often each activity shows up in your week.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::exploration::{ScreenOutcome, SignalDelta, SignalKey};

pub const WORK_FREQUENCY_STEP: &str = "work-frequency-question";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkActivity {
    Communicating,
    Planning,
    Solving,
    Collaborating,
    Learning,
}

impl WorkActivity {
    pub const ALL: [WorkActivity; 5] = [
        WorkActivity::Communicating,
        WorkActivity::Planning,
        WorkActivity::Solving,
        WorkActivity::Collaborating,
        WorkActivity::Learning,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkActivity::Communicating => "Communicating ideas",
            WorkActivity::Planning => "Planning & organizing",
            WorkActivity::Solving => "Solving unclear problems",
            WorkActivity::Collaborating => "Collaborating with others",
            WorkActivity::Learning => "Learning new tools",
        }
    }

    /// The signal this activity feeds.
    pub fn signal(&self) -> SignalKey {
        match self {
            WorkActivity::Communicating | WorkActivity::Collaborating => SignalKey::Social,
            WorkActivity::Planning => SignalKey::Structured,
            WorkActivity::Solving => SignalKey::Analytical,
            WorkActivity::Learning => SignalKey::Exploratory,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Often,
    Sometimes,
    Rarely,
}

impl Frequency {
    /// Contribution to the activity's signal; `None` for no contribution.
    pub fn weight(&self) -> Option<f64> {
        match self {
            Frequency::Often => Some(2.0),
            Frequency::Sometimes => Some(1.0),
            Frequency::Rarely => None,
        }
    }
}

/// Sums the contribution of every answered activity.
pub fn map_work_frequency(answers: &BTreeMap<WorkActivity, Frequency>) -> ScreenOutcome {
    let signals = answers
        .iter()
        .filter_map(|(activity, frequency)| {
            frequency.weight().map(|weight| (activity.signal(), weight))
        })
        .collect::<SignalDelta>();

    if answers.len() < WorkActivity::ALL.len() {
        tracing::debug!(
            answered = answers.len(),
            "Work frequency submitted with unanswered activities"
        );
    }

    ScreenOutcome::from_signals(signals, WORK_FREQUENCY_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_activities_accumulate_together() {
        let answers = BTreeMap::from([
            (WorkActivity::Communicating, Frequency::Often),
            (WorkActivity::Collaborating, Frequency::Sometimes),
            (WorkActivity::Planning, Frequency::Rarely),
            (WorkActivity::Solving, Frequency::Often),
            (WorkActivity::Learning, Frequency::Sometimes),
        ]);

        let outcome = map_work_frequency(&answers);

        assert_eq!(outcome.signals.get(SignalKey::Social), Some(3.0));
        assert_eq!(outcome.signals.get(SignalKey::Analytical), Some(2.0));
        assert_eq!(outcome.signals.get(SignalKey::Exploratory), Some(1.0));
        assert_eq!(outcome.signals.get(SignalKey::Structured), None);
        assert_eq!(outcome.step, Some(WORK_FREQUENCY_STEP));
    }

    #[test]
    fn all_rarely_contributes_nothing_but_completes() {
        let answers = WorkActivity::ALL
            .iter()
            .map(|a| (*a, Frequency::Rarely))
            .collect::<BTreeMap<_, _>>();

        let outcome = map_work_frequency(&answers);

        assert!(outcome.signals.is_empty());
        assert_eq!(outcome.step, Some(WORK_FREQUENCY_STEP));
    }
}
