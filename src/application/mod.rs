//! Application layer - Commands and Handlers.
//!
//! This layer sequences the generative backends and turns their output into
//! domain values.

pub mod handlers;

pub use handlers::{FetchStoryCommand, FetchStoryError, FetchStoryHandler, StoryDraft};
