//! Exploration intent and situational context.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the user is exploring; drives which question path follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Pivot,
    Growth,
    Explore,
    Curious,
}

impl Intent {
    pub const ALL: [Intent; 4] = [Intent::Pivot, Intent::Growth, Intent::Explore, Intent::Curious];

    /// Maps an intent screen option id to an intent.
    ///
    /// Unknown ids fall back to `Explore`.
    pub fn from_option_id(option_id: &str) -> Self {
        match option_id {
            "starting" => Intent::Explore,
            "shifting" => Intent::Pivot,
            "growing" => Intent::Growth,
            "curious" => Intent::Curious,
            other => {
                tracing::warn!(option_id = other, "Unknown intent option, defaulting to explore");
                Intent::Explore
            }
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Intent::Pivot => "pivot",
            Intent::Growth => "growth",
            Intent::Explore => "explore",
            Intent::Curious => "curious",
        };
        write!(f, "{}", s)
    }
}

/// Situational context gathered on the pivot path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_proximity: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_ids_map_to_intents() {
        assert_eq!(Intent::from_option_id("starting"), Intent::Explore);
        assert_eq!(Intent::from_option_id("shifting"), Intent::Pivot);
        assert_eq!(Intent::from_option_id("growing"), Intent::Growth);
        assert_eq!(Intent::from_option_id("curious"), Intent::Curious);
    }

    #[test]
    fn unknown_option_defaults_to_explore() {
        assert_eq!(Intent::from_option_id("something-else"), Intent::Explore);
    }

    #[test]
    fn empty_context_serializes_to_empty_object() {
        let json = serde_json::to_string(&ExplorationContext::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
