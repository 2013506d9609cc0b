//! Grounded Text Generator Port - free-text answers backed by live web search.
//!
//! Structured output is not available while search grounding is on, so the
//! port returns plain text plus the citations the backend attached to it.

use async_trait::async_trait;

use crate::domain::news::GroundingChunk;

use super::ai_provider::{AIError, ProviderInfo};

/// Port for search-grounded text generation.
#[async_trait]
pub trait GroundedTextGenerator: Send + Sync {
    /// Generates an answer to the prompt, optionally consulting web search.
    async fn generate_grounded(
        &self,
        request: GroundedTextRequest,
    ) -> Result<GroundedTextResponse, AIError>;

    /// Get provider information.
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for a grounded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundedTextRequest {
    /// Natural-language prompt.
    pub prompt: String,
    /// Whether the backend may search the web and cite results.
    pub search_grounding: bool,
}

impl GroundedTextRequest {
    /// Creates a request with search grounding enabled.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            search_grounding: true,
        }
    }

    /// Sets whether search grounding is enabled.
    pub fn with_search_grounding(mut self, enabled: bool) -> Self {
        self.search_grounding = enabled;
        self
    }
}

/// Answer text with its grounding citations, in backend order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroundedTextResponse {
    pub text: String,
    pub grounding_chunks: Vec<GroundingChunk>,
}

impl GroundedTextResponse {
    /// Creates a response with no citations.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            grounding_chunks: Vec::new(),
        }
    }

    /// Appends a grounding chunk.
    pub fn with_chunk(mut self, chunk: GroundingChunk) -> Self {
        self.grounding_chunks.push(chunk);
        self
    }
}
