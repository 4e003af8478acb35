//! Abstract shapes game - "pick the two that belong together".

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::exploration::{ScreenOutcome, SignalDelta, SignalKey};

use super::combination::CombinationTable;

/// Step id recorded when the game completes with a known combination.
pub const ABSTRACT_SHAPES_STEP: &str = "abstract-shapes-game";

/// Weight added to the signal of the chosen combination.
pub const SHAPE_SIGNAL_WEIGHT: f64 = 3.0;

/// The four shape cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShapeCard {
    /// Red triangle
    A,
    /// Blue triangle
    B,
    /// Blue circle
    C,
    /// Red square
    D,
}

impl ShapeCard {
    pub const ALL: [ShapeCard; 4] = [ShapeCard::A, ShapeCard::B, ShapeCard::C, ShapeCard::D];

    pub fn label(&self) -> &'static str {
        match self {
            ShapeCard::A => "Red Triangle",
            ShapeCard::B => "Blue Triangle",
            ShapeCard::C => "Blue Circle",
            ShapeCard::D => "Red Square",
        }
    }
}

/// What a pairing says about the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeCombination {
    pub signal: SignalKey,
    pub interpretation: &'static str,
}

static SHAPE_COMBINATIONS: Lazy<CombinationTable<ShapeCard, ShapeCombination>> = Lazy::new(|| {
    use ShapeCard::*;
    CombinationTable::from_entries([
        (A, B, ShapeCombination { signal: SignalKey::Analytical, interpretation: "Structural similarity" }),
        (B, C, ShapeCombination { signal: SignalKey::Creative, interpretation: "Visual grouping" }),
        (A, D, ShapeCombination { signal: SignalKey::Creative, interpretation: "Aesthetic grouping" }),
        (C, D, ShapeCombination { signal: SignalKey::Exploratory, interpretation: "Conceptual contrast" }),
    ])
});

/// The static combination table.
pub fn shape_combinations() -> &'static CombinationTable<ShapeCard, ShapeCombination> {
    &SHAPE_COMBINATIONS
}

/// Maps a two-card selection to its outcome.
///
/// Pairs without an entry contribute nothing and record no step; the caller
/// still advances.
pub fn map_abstract_shapes(first: ShapeCard, second: ShapeCard) -> ScreenOutcome {
    match SHAPE_COMBINATIONS.lookup(first, second) {
        Some(combination) => {
            tracing::debug!(
                ?first,
                ?second,
                signal = %combination.signal,
                interpretation = combination.interpretation,
                "Abstract shapes result"
            );
            ScreenOutcome::from_signals(
                SignalDelta::new().with(combination.signal, SHAPE_SIGNAL_WEIGHT),
                ABSTRACT_SHAPES_STEP,
            )
        }
        None => {
            tracing::warn!(?first, ?second, "No abstract shapes combination for selection");
            ScreenOutcome::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_and_b_yield_analytical_in_either_order() {
        for (first, second) in [(ShapeCard::A, ShapeCard::B), (ShapeCard::B, ShapeCard::A)] {
            let outcome = map_abstract_shapes(first, second);
            assert_eq!(
                outcome.signals,
                SignalDelta::new().with(SignalKey::Analytical, 3.0)
            );
            assert_eq!(outcome.step, Some(ABSTRACT_SHAPES_STEP));
        }
    }

    #[test]
    fn lookup_is_symmetric_for_every_card_pair() {
        for a in ShapeCard::ALL {
            for b in ShapeCard::ALL {
                assert_eq!(map_abstract_shapes(a, b), map_abstract_shapes(b, a));
            }
        }
    }

    #[test]
    fn table_covers_four_pairs() {
        assert_eq!(shape_combinations().len(), 4);
        assert_eq!(
            shape_combinations().lookup(ShapeCard::D, ShapeCard::C).map(|c| c.signal),
            Some(SignalKey::Exploratory)
        );
    }

    #[test]
    fn unknown_pair_is_a_silent_no_op() {
        let outcome = map_abstract_shapes(ShapeCard::A, ShapeCard::C);
        assert!(outcome.is_empty());
    }

    #[test]
    fn same_card_twice_is_a_no_op() {
        assert!(map_abstract_shapes(ShapeCard::B, ShapeCard::B).is_empty());
    }
}
