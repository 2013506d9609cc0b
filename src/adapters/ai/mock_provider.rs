//! Mock AI Provider for testing and offline runs.
//!
//! Implements both generation ports so a single instance can stand in for the
//! Gemini backend.
//!
//! # Features
//!
//! - Pre-configured text and image responses, consumed in order
//! - Simulated delays
//! - Error injection for failure-path testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_text("HEADLINE: Quake hits Tokyo\nSUMMARY: A moderate earthquake...")
//!     .with_image(jpeg_bytes);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::news::GroundingChunk;
use crate::ports::{
    AIError, GroundedTextGenerator, GroundedTextRequest, GroundedTextResponse, ImageGenerator,
    ImageRequest, ImageResponse, ProviderInfo,
};

/// Text returned once the configured responses are exhausted.
pub const DEFAULT_MOCK_TEXT: &str = "Mock response";

/// Mock provider for both generation ports.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    text_responses: Arc<Mutex<VecDeque<MockResponse<GroundedTextResponse>>>>,
    image_responses: Arc<Mutex<VecDeque<MockResponse<ImageResponse>>>>,
    /// Simulated latency per request.
    delay: Duration,
    text_calls: Arc<Mutex<Vec<GroundedTextRequest>>>,
    image_calls: Arc<Mutex<Vec<ImageRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse<T> {
    /// Return a successful payload.
    Success(T),
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate quota exhaustion.
    RateLimited { message: String },
    /// Simulate safety filtering.
    ContentFiltered { reason: String },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u64 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { message } => AIError::rate_limited(message),
            MockError::ContentFiltered { reason } => AIError::content_filtered(reason),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    /// Creates a new mock provider with empty queues.
    pub fn new() -> Self {
        Self {
            text_responses: Arc::new(Mutex::new(VecDeque::new())),
            image_responses: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            text_calls: Arc::new(Mutex::new(Vec::new())),
            image_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a text answer without citations.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_text_response(GroundedTextResponse::new(text))
    }

    /// Queues a text answer with its grounding chunks.
    pub fn with_grounded_text(
        self,
        text: impl Into<String>,
        chunks: impl IntoIterator<Item = GroundingChunk>,
    ) -> Self {
        self.with_text_response(GroundedTextResponse {
            text: text.into(),
            grounding_chunks: chunks.into_iter().collect(),
        })
    }

    /// Queues a full text response.
    pub fn with_text_response(self, response: GroundedTextResponse) -> Self {
        lock(&self.text_responses).push_back(MockResponse::Success(response));
        self
    }

    /// Queues a text failure.
    pub fn with_text_error(self, error: MockError) -> Self {
        lock(&self.text_responses).push_back(MockResponse::Error(error));
        self
    }

    /// Queues a single generated image.
    pub fn with_image(self, bytes: impl Into<Vec<u8>>) -> Self {
        lock(&self.image_responses).push_back(MockResponse::Success(ImageResponse::single(bytes)));
        self
    }

    /// Queues an image response with no images.
    pub fn with_no_image(self) -> Self {
        lock(&self.image_responses).push_back(MockResponse::Success(ImageResponse::empty()));
        self
    }

    /// Queues an image failure.
    pub fn with_image_error(self, error: MockError) -> Self {
        lock(&self.image_responses).push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of text requests made.
    pub fn text_call_count(&self) -> usize {
        lock(&self.text_calls).len()
    }

    /// Returns the number of image requests made.
    pub fn image_call_count(&self) -> usize {
        lock(&self.image_calls).len()
    }

    /// Returns all recorded text requests.
    pub fn text_calls(&self) -> Vec<GroundedTextRequest> {
        lock(&self.text_calls).clone()
    }

    /// Returns all recorded image requests.
    pub fn image_calls(&self) -> Vec<ImageRequest> {
        lock(&self.image_calls).clone()
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

// A poisoned lock only means another test thread panicked; the data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl GroundedTextGenerator for MockAIProvider {
    async fn generate_grounded(
        &self,
        request: GroundedTextRequest,
    ) -> Result<GroundedTextResponse, AIError> {
        lock(&self.text_calls).push(request);
        self.simulate_latency().await;

        let next = lock(&self.text_responses).pop_front();
        match next {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err.into()),
            None => Ok(GroundedTextResponse::new(DEFAULT_MOCK_TEXT)),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-text-1").with_grounding(true)
    }
}

#[async_trait]
impl ImageGenerator for MockAIProvider {
    async fn generate_images(&self, request: ImageRequest) -> Result<ImageResponse, AIError> {
        lock(&self.image_calls).push(request);
        self.simulate_latency().await;

        let next = lock(&self.image_responses).pop_front();
        match next {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err.into()),
            None => Ok(ImageResponse::empty()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-image-1")
    }
}
