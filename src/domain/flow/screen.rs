//! Screen enum and navigation rules for the exploration flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::exploration::Intent;
use crate::domain::foundation::{StateMachine, ValidationError};

/// One screen of the exploration quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Landing,
    Start,
    Intent,
    Attention,
    Learning,
    WorkProximity,
    EnergyDragDrop,
    Priorities,
    WorkFrequency,
    GrowthDesires,
    CuriousInterests,
    MessyInbox,
    AdviceVoices,
    AbstractShapes,
    SituationalChoices,
    Completion,
    Loading,
    Results,
}

impl Screen {
    pub const ALL: [Screen; 18] = [
        Screen::Landing,
        Screen::Start,
        Screen::Intent,
        Screen::Attention,
        Screen::Learning,
        Screen::WorkProximity,
        Screen::EnergyDragDrop,
        Screen::Priorities,
        Screen::WorkFrequency,
        Screen::GrowthDesires,
        Screen::CuriousInterests,
        Screen::MessyInbox,
        Screen::AdviceVoices,
        Screen::AbstractShapes,
        Screen::SituationalChoices,
        Screen::Completion,
        Screen::Loading,
        Screen::Results,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Start => "start",
            Screen::Intent => "intent",
            Screen::Attention => "attention",
            Screen::Learning => "learning",
            Screen::WorkProximity => "work-proximity",
            Screen::EnergyDragDrop => "energy-drag-drop",
            Screen::Priorities => "priorities",
            Screen::WorkFrequency => "work-frequency",
            Screen::GrowthDesires => "growth-desires",
            Screen::CuriousInterests => "curious-interests",
            Screen::MessyInbox => "messy-inbox",
            Screen::AdviceVoices => "advice-voices",
            Screen::AbstractShapes => "abstract-shapes",
            Screen::SituationalChoices => "situational-choices",
            Screen::Completion => "completion",
            Screen::Loading => "loading",
            Screen::Results => "results",
        }
    }

    /// First screen of the question path for an intent.
    pub fn path_entry(intent: Intent) -> Screen {
        match intent {
            Intent::Pivot => Screen::WorkProximity,
            Intent::Growth => Screen::WorkFrequency,
            Intent::Curious => Screen::CuriousInterests,
            Intent::Explore => Screen::Attention,
        }
    }

    /// Forward target, or `None` for the results screen.
    ///
    /// The intent screen branches on `intent` and fails without one.
    pub fn next(&self, intent: Option<Intent>) -> Result<Option<Screen>, ValidationError> {
        let next = match self {
            Screen::Landing => Screen::Start,
            Screen::Start => Screen::Intent,
            Screen::Intent => {
                let intent = intent.ok_or_else(|| ValidationError::empty_field("intent"))?;
                Screen::path_entry(intent)
            }
            Screen::Attention => Screen::Learning,
            Screen::WorkProximity => Screen::EnergyDragDrop,
            Screen::EnergyDragDrop => Screen::Priorities,
            Screen::WorkFrequency => Screen::GrowthDesires,
            Screen::Learning
            | Screen::Priorities
            | Screen::GrowthDesires
            | Screen::CuriousInterests => Screen::MessyInbox,
            Screen::MessyInbox => Screen::AdviceVoices,
            Screen::AdviceVoices => Screen::AbstractShapes,
            Screen::AbstractShapes => Screen::SituationalChoices,
            Screen::SituationalChoices => Screen::Completion,
            Screen::Completion => Screen::Loading,
            Screen::Loading => Screen::Results,
            Screen::Results => return Ok(None),
        };
        Ok(Some(next))
    }

    /// Back target. Games, completion, loading and results have none.
    pub fn back(&self) -> Option<Screen> {
        match self {
            Screen::Start => Some(Screen::Landing),
            Screen::Intent => Some(Screen::Start),
            Screen::Attention
            | Screen::WorkProximity
            | Screen::WorkFrequency
            | Screen::CuriousInterests => Some(Screen::Intent),
            Screen::Learning => Some(Screen::Attention),
            Screen::EnergyDragDrop => Some(Screen::WorkProximity),
            Screen::Priorities => Some(Screen::EnergyDragDrop),
            Screen::GrowthDesires => Some(Screen::WorkFrequency),
            _ => None,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.back().is_some()
    }
}

impl StateMachine for Screen {
    fn valid_transitions(&self) -> Vec<Self> {
        let mut targets: Vec<Screen> = match self {
            Screen::Intent => Intent::ALL.iter().map(|i| Screen::path_entry(*i)).collect(),
            other => other.next(None).ok().flatten().into_iter().collect(),
        };
        if let Some(back) = self.back() {
            targets.push(back);
        }
        targets
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(intent: Intent) -> Vec<Screen> {
        let mut path = vec![Screen::Landing];
        let mut current = Screen::Landing;
        while let Some(next) = current.next(Some(intent)).unwrap() {
            assert!(current.can_transition_to(&next));
            path.push(next);
            current = next;
        }
        path
    }

    #[test]
    fn default_is_landing() {
        assert_eq!(Screen::default(), Screen::Landing);
    }

    #[test]
    fn pivot_path_visits_context_screens() {
        assert_eq!(
            walk(Intent::Pivot),
            vec![
                Screen::Landing,
                Screen::Start,
                Screen::Intent,
                Screen::WorkProximity,
                Screen::EnergyDragDrop,
                Screen::Priorities,
                Screen::MessyInbox,
                Screen::AdviceVoices,
                Screen::AbstractShapes,
                Screen::SituationalChoices,
                Screen::Completion,
                Screen::Loading,
                Screen::Results,
            ]
        );
    }

    #[test]
    fn each_intent_branches_to_its_path() {
        assert_eq!(
            walk(Intent::Growth)[3..6],
            [Screen::WorkFrequency, Screen::GrowthDesires, Screen::MessyInbox]
        );
        assert_eq!(
            walk(Intent::Curious)[3..5],
            [Screen::CuriousInterests, Screen::MessyInbox]
        );
        assert_eq!(
            walk(Intent::Explore)[3..6],
            [Screen::Attention, Screen::Learning, Screen::MessyInbox]
        );
    }

    #[test]
    fn every_path_ends_at_results() {
        for intent in Intent::ALL {
            assert_eq!(walk(intent).last(), Some(&Screen::Results));
        }
    }

    #[test]
    fn intent_screen_needs_an_intent() {
        assert!(Screen::Intent.next(None).is_err());
    }

    #[test]
    fn back_navigation_matches_paths() {
        assert_eq!(Screen::CuriousInterests.back(), Some(Screen::Intent));
        assert_eq!(Screen::GrowthDesires.back(), Some(Screen::WorkFrequency));
        assert_eq!(Screen::Priorities.back(), Some(Screen::EnergyDragDrop));
        assert_eq!(Screen::Learning.back(), Some(Screen::Attention));
        assert_eq!(Screen::Start.back(), Some(Screen::Landing));
    }

    #[test]
    fn games_and_terminal_screens_cannot_go_back() {
        for screen in [
            Screen::Landing,
            Screen::MessyInbox,
            Screen::AdviceVoices,
            Screen::AbstractShapes,
            Screen::SituationalChoices,
            Screen::Completion,
            Screen::Loading,
            Screen::Results,
        ] {
            assert!(!screen.can_go_back(), "{} should not go back", screen);
        }
    }

    #[test]
    fn results_is_terminal() {
        assert!(Screen::Results.is_terminal());
        assert!(!Screen::Loading.is_terminal());
    }

    #[test]
    fn skipping_ahead_is_rejected() {
        let err = Screen::Start.transition_to(Screen::MessyInbox).unwrap_err();
        assert!(err.to_string().contains("state_transition"));
    }

    #[test]
    fn every_screen_is_reachable_from_landing() {
        let mut seen = vec![Screen::Landing];
        let mut frontier = vec![Screen::Landing];
        while let Some(screen) = frontier.pop() {
            for target in screen.valid_transitions() {
                if !seen.contains(&target) {
                    seen.push(target);
                    frontier.push(target);
                }
            }
        }
        assert_eq!(seen.len(), Screen::ALL.len());
    }

    #[test]
    fn serializes_to_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Screen::EnergyDragDrop).unwrap(),
            "\"energy-drag-drop\""
        );
        for screen in Screen::ALL {
            assert_eq!(serde_json::to_string(&screen).unwrap(), format!("\"{}\"", screen));
        }
    }
}
