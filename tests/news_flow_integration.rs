//! Integration tests for the full search flow.
//!
//! These tests drive the public API the way the binary does:
//! 1. A mock backend stands in for Gemini and Imagen
//! 2. `FetchStoryHandler` runs both generation steps
//! 3. `NewsDesk` reduces every outcome into the page state and renders it

use std::sync::Arc;

use global_pulse::adapters::{MockAIProvider, MockError, NewsDesk};
use global_pulse::application::{FetchStoryCommand, FetchStoryError, FetchStoryHandler};
use global_pulse::config::DisplayConfig;
use global_pulse::domain::news::{GroundingChunk, ImageReference, Source};
use global_pulse::domain::search::LoadingState;
use global_pulse::ports::AIError;

// =============================================================================
// Test Infrastructure
// =============================================================================

const JAPAN_ANSWER: &str = "HEADLINE: Quake hits Tokyo\nSUMMARY: A moderate earthquake...";

fn japan_provider() -> MockAIProvider {
    MockAIProvider::new()
        .with_grounded_text(
            JAPAN_ANSWER,
            [GroundingChunk::web("https://news.example/1", "Example News")],
        )
        .with_image(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
}

fn handler_for(provider: &MockAIProvider) -> FetchStoryHandler {
    let shared = Arc::new(provider.clone());
    FetchStoryHandler::new(shared.clone(), shared)
}

fn plain_display() -> DisplayConfig {
    DisplayConfig {
        color: false,
        ..Default::default()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn japan_end_to_end() {
    let provider = japan_provider();
    let mut desk = NewsDesk::new(handler_for(&provider), plain_display());
    let mut out = Vec::new();

    assert!(desk.submit("Japan", &mut out).await.unwrap());

    let state = desk.state();
    assert_eq!(state.phase(), LoadingState::Complete);
    assert!(state.error().is_none());

    let result = state.result().expect("result present when complete");
    assert_eq!(result.country, "Japan");
    assert_eq!(result.headline, "Quake hits Tokyo");
    assert_eq!(result.summary, "A moderate earthquake...");
    assert_eq!(
        result.sources,
        vec![Source {
            title: "Example News".to_string(),
            url: "https://news.example/1".to_string(),
        }]
    );
    assert!(result.image_url.starts_with("data:image/jpeg;base64,"));

    assert_eq!(provider.text_call_count(), 1);
    assert_eq!(provider.image_call_count(), 1);

    let page = String::from_utf8(out).unwrap();
    assert!(page.contains("Quake hits Tokyo"));
    assert!(page.contains("Example News <https://news.example/1>"));
}

#[tokio::test]
async fn degraded_story_still_completes() {
    let provider = MockAIProvider::new()
        .with_text("HEADLINE: Snow closes passes\nSUMMARY: Heavy snow fell overnight.")
        .with_no_image();

    let result = handler_for(&provider)
        .handle(FetchStoryCommand::new("Switzerland"))
        .await
        .unwrap();

    assert_eq!(result.image_url, ImageReference::PLACEHOLDER_URL);
    assert!(result.sources.is_empty());
}

#[tokio::test]
async fn quota_error_surfaces_verbatim() {
    let provider = MockAIProvider::new().with_text_error(MockError::RateLimited {
        message: "Resource has been exhausted".to_string(),
    });
    let mut desk = NewsDesk::new(handler_for(&provider), plain_display());
    let mut out = Vec::new();

    desk.submit("Japan", &mut out).await.unwrap();

    assert_eq!(desk.state().phase(), LoadingState::Error);
    assert_eq!(
        desk.state().error(),
        Some("rate limited: Resource has been exhausted")
    );
    assert!(desk.state().result().is_none());
    assert_eq!(provider.image_call_count(), 0);
}

#[tokio::test]
async fn handler_error_is_the_provider_error() {
    let provider = MockAIProvider::new()
        .with_text("HEADLINE: a\nSUMMARY: b")
        .with_image_error(MockError::Timeout { timeout_secs: 120 });

    let err = handler_for(&provider)
        .handle(FetchStoryCommand::new("Japan"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        FetchStoryError::Provider(AIError::Timeout { timeout_secs: 120 })
    );
}

#[tokio::test]
async fn consecutive_searches_replace_the_result() {
    let provider = japan_provider()
        .with_text("HEADLINE: Carnival begins\nSUMMARY: Rio celebrates.")
        .with_image(vec![1, 2, 3]);
    let mut desk = NewsDesk::new(handler_for(&provider), plain_display());
    let mut out = Vec::new();

    desk.submit("Japan", &mut out).await.unwrap();
    let first_accent = desk.state().accent();
    desk.submit("Brazil", &mut out).await.unwrap();

    let result = desk.state().result().unwrap();
    assert_eq!(result.country, "Brazil");
    assert_eq!(result.headline, "Carnival begins");
    assert_ne!(desk.state().accent(), first_accent);
}
