//! Grounding citations returned alongside search-backed text.

use serde::{Deserialize, Serialize};

/// One grounding chunk; only web-backed chunks become sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingChunk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebReference>,
}

/// A web page the model consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl GroundingChunk {
    /// A web-backed chunk.
    pub fn web(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            web: Some(WebReference {
                uri: Some(uri.into()),
                title: Some(title.into()),
            }),
        }
    }

    /// A chunk without a web reference (e.g. retrieved context).
    pub fn non_web() -> Self {
        Self { web: None }
    }
}
