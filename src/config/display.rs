//! Terminal display configuration

use serde::Deserialize;

use super::error::ValidationError;

/// How the story page is rendered and logged
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Maximum number of source links shown on the card
    #[serde(default = "default_max_sources")]
    pub max_sources: usize,

    /// Colour the page with the accent palette
    #[serde(default = "default_color")]
    pub color: bool,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl DisplayConfig {
    /// Validate display configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_sources == 0 || self.max_sources > 10 {
            return Err(ValidationError::InvalidSourceLimit);
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_sources: default_max_sources(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

fn default_max_sources() -> usize {
    3
}

fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
