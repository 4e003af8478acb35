//! State machine trait for enumerable lifecycles.
//!
//! The exploration flow implements this for its screen enum so that every
//! valid path through the quiz can be enumerated and tested.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors list their valid targets; `can_transition_to` and the
/// validated `transition_to` are derived from that list.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for Screen {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Screen::Landing => vec![Screen::Start],
///             Screen::Results => vec![Screen::Landing],
///             // ... etc
///         }
///     }
/// }
///
/// let next = Screen::Landing.transition_to(Screen::Start)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
