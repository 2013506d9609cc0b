//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `GLOBAL_PULSE` prefix and
//! `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use global_pulse::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Text model: {}", config.ai.text_model);
//! ```

mod ai;
mod display;
mod error;

pub use ai::AiConfig;
pub use display::DisplayConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Gemini / Imagen configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Terminal display configuration
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GLOBAL_PULSE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `GLOBAL_PULSE__AI__API_KEY=...` -> `ai.api_key = ...`
    /// - `GLOBAL_PULSE__DISPLAY__MAX_SOURCES=5` -> `display.max_sources = 5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GLOBAL_PULSE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values, including the API key
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.display.validate()?;
        Ok(())
    }

    /// Validate for offline runs, where no API key is needed
    pub fn validate_offline(&self) -> Result<(), ValidationError> {
        self.ai.validate_settings()?;
        self.display.validate()?;
        Ok(())
    }
}
