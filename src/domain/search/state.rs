//! Immutable search state and its reducer.
//!
//! The root controller never mutates state in place: every user action or
//! backend outcome is an [`SearchAction`] fed to [`SearchState::reduce`], which
//! returns the next record. Actions that do not apply to the current phase
//! leave the state untouched.

use tracing::debug;

use crate::domain::foundation::StateMachine;
use crate::domain::news::{Country, NewsResult};

use super::accent::Accent;
use super::loading_state::LoadingState;

/// Message shown when a failure carries no description.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch news. Please try again.";

/// Something that happened to the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// The user submitted the search form with raw input.
    Submit(String),
    /// The text step finished; the illustration is being generated.
    HeadlineFound,
    /// The story card is ready.
    StoryReady(NewsResult),
    /// Either backend call failed, with an optional description.
    StoryFailed(Option<String>),
}

/// Snapshot of everything the page renders from.
///
/// Invariants: `result` is present only in `Complete`; `error` is present,
/// non-empty, only in `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    phase: LoadingState,
    query: Option<Country>,
    result: Option<NewsResult>,
    error: Option<String>,
    accent: Accent,
}

impl SearchState {
    /// Initial idle state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadingState {
        self.phase
    }

    /// Country of the current or last accepted query.
    pub fn query(&self) -> Option<&Country> {
        self.query.as_ref()
    }

    pub fn result(&self) -> Option<&NewsResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn accent(&self) -> Accent {
        self.accent
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_in_flight()
    }

    /// Pure transition function.
    pub fn reduce(&self, action: SearchAction) -> SearchState {
        match action {
            SearchAction::Submit(raw) => self.submit(&raw),
            SearchAction::HeadlineFound => self.advance(LoadingState::GeneratingImage, None, None),
            SearchAction::StoryReady(result) => {
                self.advance(LoadingState::Complete, Some(result), None)
            }
            SearchAction::StoryFailed(message) => {
                let message = message
                    .map(|m| m.trim().to_string())
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
                self.advance(LoadingState::Error, None, Some(message))
            }
        }
    }

    fn submit(&self, raw: &str) -> SearchState {
        if !self.phase.accepts_submission() {
            debug!(phase = ?self.phase, "Submission ignored while a request is in flight");
            return self.clone();
        }
        let country = match Country::new(raw) {
            Ok(country) => country,
            Err(_) => {
                debug!("Submission ignored: empty country");
                return self.clone();
            }
        };

        SearchState {
            phase: LoadingState::Searching,
            query: Some(country),
            result: None,
            error: None,
            accent: self.accent.next(),
        }
    }

    fn advance(
        &self,
        target: LoadingState,
        result: Option<NewsResult>,
        error: Option<String>,
    ) -> SearchState {
        match self.phase.transition_to(target) {
            Ok(phase) => SearchState {
                phase,
                query: self.query.clone(),
                result,
                error,
                accent: self.accent,
            },
            Err(err) => {
                debug!(error = %err, "Action ignored");
                self.clone()
            }
        }
    }
}
