//! Phase of the single story search.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where the current query is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadingState {
    #[default]
    Idle,
    Searching,
    GeneratingImage,
    Complete,
    Error,
}

impl LoadingState {
    /// True while a request is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, LoadingState::Searching | LoadingState::GeneratingImage)
    }

    /// True if a new search may start from here.
    pub fn accepts_submission(&self) -> bool {
        !self.is_in_flight()
    }
}

impl StateMachine for LoadingState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use LoadingState::*;
        matches!(
            (self, target),
            (Idle, Searching)
                | (Complete, Searching)
                | (Error, Searching)
                | (Searching, GeneratingImage)
                | (Searching, Complete)
                | (Searching, Error)
                | (GeneratingImage, Complete)
                | (GeneratingImage, Error)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use LoadingState::*;
        match self {
            Idle | Complete | Error => vec![Searching],
            Searching => vec![GeneratingImage, Complete, Error],
            GeneratingImage => vec![Complete, Error],
        }
    }
}
