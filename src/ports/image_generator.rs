//! Image Generator Port - text-to-image generation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ai_provider::{AIError, ProviderInfo};

/// Port for image generation.
///
/// Returning zero images is not an error; callers decide how to degrade.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates images for the prompt.
    async fn generate_images(&self, request: ImageRequest) -> Result<ImageResponse, AIError>;

    /// Get provider information.
    fn provider_info(&self) -> ProviderInfo;
}

/// Frame shape of the generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
        }
    }
}

/// Encoding of the generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageFormat {
    #[default]
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }
}

/// Request for image generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Natural-language description of the image.
    pub prompt: String,
    /// How many images to produce.
    pub count: u8,
    pub aspect_ratio: AspectRatio,
    pub format: ImageFormat,
}

impl ImageRequest {
    /// One 16:9 JPEG for the prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            count: 1,
            aspect_ratio: AspectRatio::Widescreen,
            format: ImageFormat::Jpeg,
        }
    }
}

/// A single generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Raw encoded image bytes.
    pub bytes: Vec<u8>,
}

/// Generated images, possibly none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResponse {
    pub images: Vec<GeneratedImage>,
}

impl ImageResponse {
    /// Response carrying a single image.
    pub fn single(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            images: vec![GeneratedImage {
                bytes: bytes.into(),
            }],
        }
    }

    /// Response with no images.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bytes of the first non-empty image, if any.
    pub fn first_bytes(&self) -> Option<&[u8]> {
        self.images
            .iter()
            .map(|image| image.bytes.as_slice())
            .find(|bytes| !bytes.is_empty())
    }
}
