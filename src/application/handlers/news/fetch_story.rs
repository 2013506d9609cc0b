//! FetchStoryHandler - finds and illustrates the top story for a country.
//!
//! Runs as two awaited steps so callers can report progress in between:
//!
//! 1. [`FetchStoryHandler::search`] asks the grounded text backend for the
//!    story and parses headline, summary and sources.
//! 2. [`FetchStoryHandler::illustrate`] asks the image backend for one
//!    16:9 JPEG and assembles the card.
//!
//! Backend errors are logged and returned unchanged. An image step that
//! produces nothing degrades to a placeholder instead of failing.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::news::{
    extract_sources, image_prompt, news_prompt, parse_story_text, Country, ImageReference,
    NewsResult, Source,
};
use crate::ports::{AIError, GroundedTextGenerator, GroundedTextRequest, ImageGenerator, ImageRequest};

/// Command to fetch the top story for a country.
#[derive(Debug, Clone)]
pub struct FetchStoryCommand {
    pub country: String,
}

impl FetchStoryCommand {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }
}

/// Errors that can occur while fetching a story.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchStoryError {
    /// The country was empty or whitespace only.
    #[error("Invalid country: {0}")]
    InvalidCountry(#[from] ValidationError),

    /// Either backend call failed.
    #[error(transparent)]
    Provider(#[from] AIError),
}

/// Text step output: everything but the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDraft {
    pub country: Country,
    pub headline: String,
    pub summary: String,
    pub sources: Vec<Source>,
}

/// Handler orchestrating the grounded text and image backends.
pub struct FetchStoryHandler {
    text_generator: Arc<dyn GroundedTextGenerator>,
    image_generator: Arc<dyn ImageGenerator>,
}

impl FetchStoryHandler {
    pub fn new(
        text_generator: Arc<dyn GroundedTextGenerator>,
        image_generator: Arc<dyn ImageGenerator>,
    ) -> Self {
        Self {
            text_generator,
            image_generator,
        }
    }

    /// Runs both steps back to back.
    pub async fn handle(&self, cmd: FetchStoryCommand) -> Result<NewsResult, FetchStoryError> {
        let draft = self.search(&cmd.country).await?;
        self.illustrate(draft).await
    }

    /// Text step: grounded search, parsing and citation extraction.
    pub async fn search(&self, country: &str) -> Result<StoryDraft, FetchStoryError> {
        let country = Country::new(country)?;
        info!(country = %country, "Searching for top story");

        let request = GroundedTextRequest::new(news_prompt(&country));
        let response = self
            .text_generator
            .generate_grounded(request)
            .await
            .map_err(|err| {
                error!(country = %country, error = %err, "Grounded text generation failed");
                err
            })?;

        let parsed = parse_story_text(&response.text, &country);
        let sources = extract_sources(&response.grounding_chunks);
        info!(
            country = %country,
            headline = %parsed.headline,
            sources = sources.len(),
            "Story found"
        );

        Ok(StoryDraft {
            country,
            headline: parsed.headline,
            summary: parsed.summary,
            sources,
        })
    }

    /// Image step: one 16:9 JPEG, or the placeholder if none comes back.
    pub async fn illustrate(&self, draft: StoryDraft) -> Result<NewsResult, FetchStoryError> {
        let request = ImageRequest::new(image_prompt(&draft.country, &draft.headline));
        let response = self
            .image_generator
            .generate_images(request)
            .await
            .map_err(|err| {
                error!(country = %draft.country, error = %err, "Image generation failed");
                err
            })?;

        let image = ImageReference::from_generated(response.first_bytes());
        if image.is_placeholder() {
            warn!(country = %draft.country, "Image generation returned nothing; using placeholder");
        }

        Ok(NewsResult::assemble(
            &draft.country,
            draft.headline,
            draft.summary,
            &image,
            draft.sources,
            Timestamp::now(),
        ))
    }
}
