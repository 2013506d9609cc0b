//! Adapters - implementations of the ports and the terminal front end.

pub mod ai;
pub mod terminal;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider, MockError};
pub use terminal::NewsDesk;
