//! News handlers.

mod fetch_story;

pub use fetch_story::{FetchStoryCommand, FetchStoryError, FetchStoryHandler, StoryDraft};
