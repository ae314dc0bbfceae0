//! Application configuration module
//!
//! Provides configuration types for the application. Values come from
//! built-in defaults, an optional TOML file and environment variables, in
//! that order of priority.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Default registration endpoint path
pub const DEFAULT_REGISTER_PATH: &str = "/api/register";

/// Default sign-in endpoint prefix; the provider id is appended
pub const DEFAULT_SIGN_IN_PATH: &str = "/api/auth/signin";

/// Providers offered as social buttons when nothing is configured
pub const DEFAULT_SOCIAL_PROVIDERS: &[&str] = &["github", "google"];

/// Upper bound on one registration or sign-in call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Server URL
    pub server_url: String,
    /// Registration endpoint path
    pub register_path: String,
    /// Sign-in endpoint prefix
    pub sign_in_path: String,
    /// OAuth provider ids shown as social buttons
    pub social_providers: Vec<String>,
    /// Whole-request timeout for the HTTP client
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            register_path: DEFAULT_REGISTER_PATH.to_string(),
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_string(),
            social_providers: DEFAULT_SOCIAL_PROVIDERS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("messenger-auth").join("config.toml"))
    }

    /// Load defaults, then the config file (if present), then env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = match path {
            Some(path) if path.exists() => AppConfigBuilder::from_file(path)?,
            _ => AppConfigBuilder::default(),
        };
        builder = builder.env_overrides()?;
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        reqwest::Url::parse(&self.server_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.server_url, e)))?;

        for (name, path) in [
            ("register_path", &self.register_path),
            ("sign_in_path", &self.sign_in_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidPath { name, path: path.clone() });
            }
        }

        if self.social_providers.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::MissingValue("social_providers"));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::MissingValue("request_timeout"));
        }

        Ok(())
    }
}

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    server_url: Option<String>,
    register_path: Option<String>,
    sign_in_path: Option<String>,
    social_providers: Option<Vec<String>>,
    request_timeout_secs: Option<u64>,
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    register_path: Option<String>,
    sign_in_path: Option<String>,
    social_providers: Option<Vec<String>>,
    request_timeout: Option<Duration>,
}

impl AppConfigBuilder {
    /// Seed a builder from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&raw)?;
        Ok(Self {
            server_url: file.server_url,
            register_path: file.register_path,
            sign_in_path: file.sign_in_path,
            social_providers: file.social_providers,
            request_timeout: file.request_timeout_secs.map(Duration::from_secs),
        })
    }

    /// Apply `CLIENT_API_URL`, `AUTH_REGISTER_PATH`, `AUTH_SIGNIN_PATH`,
    /// `AUTH_SOCIAL_PROVIDERS` and `AUTH_REQUEST_TIMEOUT_SECS` when set.
    pub fn env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(url) = std::env::var("CLIENT_API_URL") {
            self.server_url = Some(url);
        }
        if let Ok(path) = std::env::var("AUTH_REGISTER_PATH") {
            self.register_path = Some(path);
        }
        if let Ok(path) = std::env::var("AUTH_SIGNIN_PATH") {
            self.sign_in_path = Some(path);
        }
        if let Ok(list) = std::env::var("AUTH_SOCIAL_PROVIDERS") {
            self.social_providers = Some(
                list.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }
        if let Ok(secs) = std::env::var("AUTH_REQUEST_TIMEOUT_SECS") {
            let parsed = secs.trim().parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                name: "AUTH_REQUEST_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
            self.request_timeout = Some(Duration::from_secs(parsed));
        }
        Ok(self)
    }

    /// Set the server URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Set the registration path
    pub fn register_path(mut self, path: String) -> Self {
        self.register_path = Some(path);
        self
    }

    /// Set the sign-in path prefix
    pub fn sign_in_path(mut self, path: String) -> Self {
        self.sign_in_path = Some(path);
        self
    }

    /// Set the social provider ids
    pub fn social_providers(mut self, providers: Vec<String>) -> Self {
        self.social_providers = Some(providers);
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            server_url: self
                .server_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.server_url),
            register_path: self.register_path.unwrap_or(defaults.register_path),
            sign_in_path: self
                .sign_in_path
                .map(|path| path.trim_end_matches('/').to_string())
                .unwrap_or(defaults.sign_in_path),
            social_providers: self.social_providers.unwrap_or(defaults.social_providers),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("{name} must start with '/': {path}")]
    InvalidPath { name: &'static str, path: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("{name} is not a whole number of seconds: {value}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
