//! The news story card and its parts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

use super::image::ImageReference;

/// Title used when a grounding citation carries none.
pub const DEFAULT_SOURCE_TITLE: &str = "Source";

/// Link used when a grounding citation carries no URI.
pub const DEFAULT_SOURCE_URL: &str = "#";

/// A country name as typed by the user, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Country(String);

impl Country {
    /// Creates a country from raw user input.
    ///
    /// Surrounding whitespace is removed; empty results are rejected.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("country"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the country name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Headline used when the model answer has no `HEADLINE:` line.
    pub fn fallback_headline(&self) -> String {
        format!("Latest News from {}", self.0)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Country {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.0
    }
}

/// A web page cited by the search grounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

impl Source {
    /// Builds a source, substituting defaults for missing or blank fields.
    pub fn from_parts(title: Option<&str>, url: Option<&str>) -> Self {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_SOURCE_TITLE);
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_SOURCE_URL);

        Self {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

/// The assembled story card for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResult {
    pub country: String,
    pub headline: String,
    pub summary: String,
    pub image_url: String,
    pub sources: Vec<Source>,
    pub timestamp: String,
}

impl NewsResult {
    /// Assembles a result stamped with the given retrieval time.
    pub fn assemble(
        country: &Country,
        headline: impl Into<String>,
        summary: impl Into<String>,
        image: &ImageReference,
        sources: Vec<Source>,
        retrieved_at: Timestamp,
    ) -> Self {
        Self {
            country: country.as_str().to_string(),
            headline: headline.into(),
            summary: summary.into(),
            image_url: image.to_url(),
            sources,
            timestamp: retrieved_at.to_local_date_string(),
        }
    }

    /// True if the image fell back to the placeholder.
    pub fn is_degraded(&self) -> bool {
        !self.image_url.starts_with(super::image::JPEG_DATA_URL_PREFIX)
    }
}
