//! Shared Module
//!
//! Platform-agnostic types used by the native app and its tests: the
//! configuration layer and the error types.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::{AuthError, Field, FormError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
