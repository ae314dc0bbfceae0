//! Shared Error Types
//!
//! Error types for the two external calls and for form submission.
//!
//! # Error Categories
//!
//! - `AuthError` - failures talking to the registration or sign-in endpoints
//! - `FormError` - a submit that was refused before any call was issued
//!
//! # Usage
//!
//! ```rust
//! use messenger_auth::shared::error::{FormError, Field};
//!
//! let error = FormError::MissingField(Field::Email);
//! assert_eq!(error.to_string(), "Email Address is required");
//! ```
use std::fmt;

use thiserror::Error;

/// Failure of an external authentication call.
///
/// For registration every variant counts as a rejection. For sign-in only
/// these count as a rejection; an error *inside* a decoded sign-in result is
/// an ordinary resolved value.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Connection, TLS or protocol failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("request failed: {status} - {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The response body did not have the expected shape
    #[error("failed to parse response: {0}")]
    Decode(String),

    /// The worker could not start its async runtime
    #[error("failed to create runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email Address",
            Field::Password => "Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons a submit or social action did not start
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Another call is still in flight
    #[error("a request is already in progress")]
    Busy,

    /// A required field is empty
    #[error("{0} is required")]
    MissingField(Field),
}
