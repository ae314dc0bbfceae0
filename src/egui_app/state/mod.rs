use std::time::Instant;

use crate::egui_app::auth::{AuthBackend, HttpAuthClient};
use crate::egui_app::form::AuthForm;
use crate::egui_app::toast::Toasts;
use crate::egui_app::Config;
use crate::shared::error::{AuthError, FormError};

/// Central application state shared across egui views.
pub struct AppState<B: AuthBackend = HttpAuthClient> {
    pub form: AuthForm<B>,
    pub toasts: Toasts,
    /// Provider ids rendered as social buttons
    pub social_providers: Vec<String>,
}

impl AppState<HttpAuthClient> {
    pub fn new(config: Config) -> Result<Self, AuthError> {
        let social_providers = config.social_providers().to_vec();
        Ok(Self::with_backend(HttpAuthClient::new(config)?, social_providers))
    }
}

impl<B: AuthBackend> AppState<B> {
    pub fn with_backend(backend: B, social_providers: Vec<String>) -> Self {
        tracing::debug!(providers = ?social_providers, "AppState initialized");
        Self {
            form: AuthForm::new(backend),
            toasts: Toasts::default(),
            social_providers,
        }
    }

    /// Pick up a settled call and expire old toasts. Runs every frame.
    pub fn check_auth_result(&mut self) {
        if let Some(notification) = self.form.poll() {
            self.toasts.push(notification);
        }
        self.toasts.prune(Instant::now());
    }

    pub fn handle_submit(&mut self) {
        if let Err(e) = self.form.submit() {
            log_refused(&e);
        }
    }

    pub fn handle_social(&mut self, provider: &str) {
        if let Err(e) = self.form.social_action(provider) {
            log_refused(&e);
        }
    }
}

fn log_refused(error: &FormError) {
    match error {
        FormError::Busy => tracing::debug!("ignoring action while a request is in flight"),
        FormError::MissingField(_) => tracing::debug!(%error, "submit refused"),
    }
}
