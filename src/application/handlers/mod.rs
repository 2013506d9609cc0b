//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over the ports.

pub mod news;

pub use news::{FetchStoryCommand, FetchStoryError, FetchStoryHandler, StoryDraft};
