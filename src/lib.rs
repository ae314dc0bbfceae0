//! Messenger Auth - Main Library
//!
//! Native authentication form for a chat-style application. The form toggles
//! between login and registration, collects name/email/password and hands the
//! actual work to two external services: a REST registration endpoint and an
//! identity provider's sign-in endpoint.
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic pieces
//!   - Configuration (`AppConfig`, builder, file/env loading)
//!   - Error types (`AuthError`, `FormError`)
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - HTTP client for registration and sign-in
//!   - Form state machine (mode toggle, submit and social dispatch)
//!   - Toast queue and views
//!
//! # Usage
//!
//! ```rust,no_run
//! use messenger_auth::egui_app::{AuthForm, Config, HttpAuthClient};
//!
//! let config = Config::new();
//! let mut form = AuthForm::new(HttpAuthClient::new(config)?);
//! form.values.email = "a@b.com".to_string();
//! form.values.password = "secret".to_string();
//! form.submit().ok();
//! # Ok::<(), messenger_auth::shared::AuthError>(())
//! ```
//!
//! # Thread Safety
//!
//! egui is single-threaded immediate mode GUI. Every external call runs on a
//! worker thread and reports back over a channel that the frame loop polls.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
