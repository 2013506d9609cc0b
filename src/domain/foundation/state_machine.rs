//! State machine trait for phase enums.
//!
//! Gives every phase enum the same vocabulary for checking and performing
//! transitions, so the reducer and the views agree on what may follow what.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors list their legal transitions and get a validated
/// `transition_to` for free.
///
/// # Example
///
/// ```
/// use global_pulse::domain::foundation::StateMachine;
/// use global_pulse::domain::search::LoadingState;
///
/// let next = LoadingState::Idle.transition_to(LoadingState::Searching).unwrap();
/// assert_eq!(next, LoadingState::Searching);
/// assert!(LoadingState::Idle.transition_to(LoadingState::Complete).is_err());
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

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

    /// Checks if current state has no valid outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
