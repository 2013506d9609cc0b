//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};

/// Gemini / Imagen configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key shared by the text and image backends
    pub api_key: Option<Secret<String>>,

    /// API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model for grounded text
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Model for illustrations
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Builds the adapter configuration.
    pub fn gemini_config(&self) -> Result<GeminiConfig, ValidationError> {
        let api_key = self
            .api_key
            .as_ref()
            .filter(|_| self.has_api_key())
            .ok_or(ValidationError::MissingRequired("API_KEY"))?;

        Ok(GeminiConfig::new(api_key.expose_secret().trim())
            .with_base_url(&self.base_url)
            .with_text_model(&self.text_model)
            .with_image_model(&self.image_model)
            .with_timeout(self.timeout()))
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("API_KEY"));
        }
        self.validate_settings()
    }

    /// Validate everything except the credential
    pub fn validate_settings(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidTimeout);
        }
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.text_model.trim().is_empty() {
            return Err(ValidationError::EmptyModel("TEXT_MODEL"));
        }
        if self.image_model.trim().is_empty() {
            return Err(ValidationError::EmptyModel("IMAGE_MODEL"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_text_model() -> String {
    DEFAULT_TEXT_MODEL.to_string()
}

fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

fn default_timeout() -> u64 {
    120
}
