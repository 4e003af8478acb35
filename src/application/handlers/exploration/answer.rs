//! ScreenAnswer - what the visitor submitted on the current screen.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::flow::Screen;
use crate::domain::mappers::{
    AdviceAnswer, ChoiceCard, EnergyCard, EnergyZone, Frequency, InboxRanking, PriorityOption,
    ShapeCard, WorkActivity,
};

/// One answer per screen kind. Screens with nothing to answer take `Continue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScreenAnswer {
    /// Screens without input: landing, start, attention, learning,
    /// growth-desires, curious-interests, completion, loading.
    Continue,
    Intent {
        option_id: String,
    },
    WorkProximity {
        selections: Vec<String>,
    },
    Energy {
        placements: BTreeMap<EnergyCard, EnergyZone>,
    },
    Priorities {
        selected: Vec<PriorityOption>,
    },
    WorkFrequency {
        answers: BTreeMap<WorkActivity, Frequency>,
    },
    MessyInbox {
        ranking: InboxRanking,
    },
    AdviceVoices {
        answer: AdviceAnswer,
    },
    AbstractShapes {
        first: ShapeCard,
        second: ShapeCard,
    },
    SituationalChoices {
        first: ChoiceCard,
        second: ChoiceCard,
    },
}

impl ScreenAnswer {
    /// True if this answer is the one `screen` expects.
    pub fn fits(&self, screen: Screen) -> bool {
        match self {
            ScreenAnswer::Continue => matches!(
                screen,
                Screen::Landing
                    | Screen::Start
                    | Screen::Attention
                    | Screen::Learning
                    | Screen::GrowthDesires
                    | Screen::CuriousInterests
                    | Screen::Completion
                    | Screen::Loading
            ),
            ScreenAnswer::Intent { .. } => screen == Screen::Intent,
            ScreenAnswer::WorkProximity { .. } => screen == Screen::WorkProximity,
            ScreenAnswer::Energy { .. } => screen == Screen::EnergyDragDrop,
            ScreenAnswer::Priorities { .. } => screen == Screen::Priorities,
            ScreenAnswer::WorkFrequency { .. } => screen == Screen::WorkFrequency,
            ScreenAnswer::MessyInbox { .. } => screen == Screen::MessyInbox,
            ScreenAnswer::AdviceVoices { .. } => screen == Screen::AdviceVoices,
            ScreenAnswer::AbstractShapes { .. } => screen == Screen::AbstractShapes,
            ScreenAnswer::SituationalChoices { .. } => screen == Screen::SituationalChoices,
        }
    }

    /// Short name used in logs and error details.
    pub fn kind(&self) -> &'static str {
        match self {
            ScreenAnswer::Continue => "continue",
            ScreenAnswer::Intent { .. } => "intent",
            ScreenAnswer::WorkProximity { .. } => "work-proximity",
            ScreenAnswer::Energy { .. } => "energy",
            ScreenAnswer::Priorities { .. } => "priorities",
            ScreenAnswer::WorkFrequency { .. } => "work-frequency",
            ScreenAnswer::MessyInbox { .. } => "messy-inbox",
            ScreenAnswer::AdviceVoices { .. } => "advice-voices",
            ScreenAnswer::AbstractShapes { .. } => "abstract-shapes",
            ScreenAnswer::SituationalChoices { .. } => "situational-choices",
        }
    }
}
