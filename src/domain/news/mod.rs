//! News module - the story card and how it is derived from model output.

mod grounding;
mod image;
mod parser;
mod prompts;
mod story;

pub use grounding::{GroundingChunk, WebReference};
pub use image::{ImageReference, JPEG_DATA_URL_PREFIX};
pub use parser::{extract_sources, parse_story_text, ParsedStory};
pub use prompts::{image_prompt, news_prompt};
pub use story::{Country, NewsResult, Source, DEFAULT_SOURCE_TITLE, DEFAULT_SOURCE_URL};
