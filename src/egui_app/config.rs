use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Application configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, then the config file at the default location, then env.
    pub fn load() -> Result<Self, ConfigError> {
        let path = AppConfig::default_path();
        let app = AppConfig::load(path.as_deref())?;
        Ok(Self { app })
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }

    /// Registration endpoint
    pub fn register_url(&self) -> String {
        self.api_url(&self.app.register_path)
    }

    /// Sign-in endpoint for one provider
    pub fn sign_in_url(&self, provider: &str) -> String {
        format!("{}/{}", self.api_url(&self.app.sign_in_path), provider)
    }

    /// Provider ids offered as social buttons
    pub fn social_providers(&self) -> &[String] {
        &self.app.social_providers
    }

    pub fn request_timeout(&self) -> Duration {
        self.app.request_timeout
    }
}
