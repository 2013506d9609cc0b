//! Ports - interfaces to the generative backends.
//!
//! The orchestration layer depends only on these traits; adapters under
//! `crate::adapters::ai` implement them.

mod ai_provider;
mod image_generator;
mod text_generator;

pub use ai_provider::{AIError, ProviderInfo};
pub use image_generator::{
    AspectRatio, GeneratedImage, ImageFormat, ImageGenerator, ImageRequest, ImageResponse,
};
pub use text_generator::{GroundedTextGenerator, GroundedTextRequest, GroundedTextResponse};
