//! AI Provider Adapters.
//!
//! Implementations of the generation ports.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Gemini grounded text and Imagen illustrations
//! - `MockAIProvider` - Configurable mock for tests and offline runs

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{
    GeminiConfig, GeminiProvider, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL,
};
pub use mock_provider::{MockAIProvider, MockError, MockResponse, DEFAULT_MOCK_TEXT};
