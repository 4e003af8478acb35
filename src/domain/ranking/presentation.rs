//! Result presentation - bubble layout, colors and signal descriptions.

use serde::Serialize;

use crate::domain::exploration::SignalKey;

use super::{MotionClass, RankedCluster};

/// Percent coordinate inside the results canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bubble anchors by rank index.
pub const LAYOUT_POSITIONS: [Position; 4] = [
    Position::new(40.0, 35.0),
    Position::new(65.0, 30.0),
    Position::new(30.0, 65.0),
    Position::new(70.0, 70.0),
];

/// Display color for a signal.
pub fn signal_color(key: SignalKey) -> &'static str {
    match key {
        SignalKey::Analytical => "#4A90E2",
        SignalKey::Social => "#7ED321",
        SignalKey::Creative => "#F5A623",
        SignalKey::Structured => "#FF6B35",
        SignalKey::Exploratory => "#9013FE",
        SignalKey::Practical => "#8E8E93",
    }
}

/// Name and overview shown when a bubble is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignalInfo {
    pub name: &'static str,
    pub overview: &'static str,
}

/// Description of the space a signal points at. `practical` has none.
pub fn signal_info(key: SignalKey) -> Option<SignalInfo> {
    let (name, overview) = match key {
        SignalKey::Analytical => (
            "Data & Insights",
            "Roles in this space focus on understanding complexity, finding patterns, and solving problems through careful analysis and systematic thinking.",
        ),
        SignalKey::Creative => (
            "Expression & Creation",
            "Roles in this space focus on bringing ideas to life, designing experiences, and communicating through visual, written, or conceptual forms.",
        ),
        SignalKey::Social => (
            "People & Community",
            "Roles in this space focus on supporting others, building connections, and helping people grow through collaboration and communication.",
        ),
        SignalKey::Structured => (
            "Systems & Operations",
            "Roles in this space focus on organizing work, maintaining systems, and ensuring projects and operations run smoothly and reliably.",
        ),
        SignalKey::Exploratory => (
            "Innovation & Growth",
            "Roles in this space focus on discovering new possibilities, testing ideas, and navigating uncertainty with curiosity and adaptability.",
        ),
        SignalKey::Practical => return None,
    };
    Some(SignalInfo { name, overview })
}

/// A ranked cluster placed on the results canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bubble {
    pub cluster: String,
    pub score: f64,
    pub size: f64,
    pub color: String,
    pub motion: MotionClass,
    pub position: Position,
    pub dominant_signal: SignalKey,
}

/// Lays ranked clusters out on the canvas in rank order.
///
/// Ranks past the position table share its last slot.
pub fn layout_bubbles(ranked: &[RankedCluster]) -> Vec<Bubble> {
    ranked
        .iter()
        .map(|cluster| {
            let slot = cluster.rank.min(LAYOUT_POSITIONS.len() - 1);
            Bubble {
                cluster: cluster.cluster.clone(),
                score: cluster.score,
                size: cluster.size,
                color: cluster.color.clone(),
                motion: cluster.motion,
                position: LAYOUT_POSITIONS[slot],
                dominant_signal: cluster.dominant_signal,
            }
        })
        .collect()
}
