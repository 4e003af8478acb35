//! Priorities question - pick up to two things that matter most.

use serde::{Deserialize, Serialize};

use crate::domain::exploration::{ScreenOutcome, SignalDelta, SignalKey};

pub const PRIORITIES_STEP: &str = "priorities-question";

/// Maximum number of options counted.
pub const MAX_PRIORITY_SELECTIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityOption {
    Stability,
    Flexibility,
    Growth,
    Creative,
    Impact,
    Stress,
}

impl PriorityOption {
    pub const ALL: [PriorityOption; 6] = [
        PriorityOption::Stability,
        PriorityOption::Flexibility,
        PriorityOption::Growth,
        PriorityOption::Creative,
        PriorityOption::Impact,
        PriorityOption::Stress,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriorityOption::Stability => "Stability & income",
            PriorityOption::Flexibility => "Time flexibility",
            PriorityOption::Growth => "Long-term growth",
            PriorityOption::Creative => "Creative freedom",
            PriorityOption::Impact => "People impact",
            PriorityOption::Stress => "Low stress",
        }
    }

    pub fn signals(&self) -> SignalDelta {
        use SignalKey::*;
        match self {
            PriorityOption::Stability => SignalDelta::new().with(Structured, 2.0),
            PriorityOption::Flexibility => {
                SignalDelta::new().with(Exploratory, 1.0).with(Creative, 1.0)
            }
            PriorityOption::Growth => SignalDelta::new().with(Analytical, 1.0).with(Structured, 1.0),
            PriorityOption::Creative => SignalDelta::new().with(Creative, 2.0),
            PriorityOption::Impact => SignalDelta::new().with(Social, 2.0),
            PriorityOption::Stress => SignalDelta::new().with(Structured, 1.0),
        }
    }
}

/// Sums the signals of the selected options.
///
/// Repeated options count once; only the first two distinct selections count.
pub fn map_priorities(selected: &[PriorityOption]) -> ScreenOutcome {
    let mut counted: Vec<PriorityOption> = Vec::with_capacity(MAX_PRIORITY_SELECTIONS);
    for option in selected {
        if counted.contains(option) {
            continue;
        }
        if counted.len() == MAX_PRIORITY_SELECTIONS {
            tracing::warn!(
                selected = selected.len(),
                "Priorities selection exceeds limit, extra options ignored"
            );
            break;
        }
        counted.push(*option);
    }

    let mut signals = SignalDelta::new();
    for option in &counted {
        signals.merge(&option.signals());
    }
    ScreenOutcome::from_signals(signals, PRIORITIES_STEP)
}
