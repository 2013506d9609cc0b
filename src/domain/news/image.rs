//! Illustration reference carried by a story card.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Prefix of an inline JPEG data reference.
pub const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Where the card's image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    /// Generated JPEG, carried inline as base64.
    InlineJpeg { base64: String },
    /// Remote stand-in used when generation produced nothing.
    Placeholder { url: String },
}

impl ImageReference {
    /// Blurred stock photo shown for degraded results.
    pub const PLACEHOLDER_URL: &'static str = "https://picsum.photos/800/450?blur=2";

    /// Encodes raw JPEG bytes as an inline reference.
    pub fn from_jpeg_bytes(bytes: &[u8]) -> Self {
        Self::InlineJpeg {
            base64: STANDARD.encode(bytes),
        }
    }

    /// The default placeholder.
    pub fn placeholder() -> Self {
        Self::Placeholder {
            url: Self::PLACEHOLDER_URL.to_string(),
        }
    }

    /// Uses the first non-empty image, or the placeholder if there is none.
    pub fn from_generated(image: Option<&[u8]>) -> Self {
        match image {
            Some(bytes) if !bytes.is_empty() => Self::from_jpeg_bytes(bytes),
            _ => Self::placeholder(),
        }
    }

    /// Renders the reference as a URL usable by the card.
    pub fn to_url(&self) -> String {
        match self {
            ImageReference::InlineJpeg { base64 } => format!("{}{}", JPEG_DATA_URL_PREFIX, base64),
            ImageReference::Placeholder { url } => url.clone(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageReference::Placeholder { .. })
    }
}
