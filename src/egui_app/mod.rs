//! egui Native Desktop App Module
//!
//! Native authentication screen built on egui/eframe. It talks to two
//! external services: the registration endpoint and the identity provider's
//! sign-in endpoint.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs     - Module exports and documentation
//! ├── main.rs    - Main application entry point (binary)
//! ├── config.rs  - Endpoint URLs built from `AppConfig`
//! ├── auth.rs    - `AuthBackend` trait and the HTTP client
//! ├── form.rs    - Mode toggle, validation and call dispatch
//! ├── toast.rs   - Transient notification queue
//! ├── types.rs   - Form and wire types
//! ├── state/     - `AppState` tying form and toasts together
//! ├── theme/     - Colors and frames
//! └── views/     - Rendering
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin auth_app
//! ```

pub mod config;
pub mod auth;
pub mod form;
pub mod toast;
pub mod types;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use auth::{AuthBackend, HttpAuthClient};
pub use form::AuthForm;
pub use toast::{Toast, Toasts};
pub use types::{FormValues, Notification, SignInResponse, Variant};
pub use state::AppState;
