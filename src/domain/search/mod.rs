//! Search module - the page's state machine.

mod accent;
mod loading_state;
mod state;

pub use accent::Accent;
pub use loading_state::LoadingState;
pub use state::{SearchAction, SearchState, GENERIC_FAILURE_MESSAGE};
