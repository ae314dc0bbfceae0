/**
 * Authentication Module
 *
 * HTTP client for the two external calls the form makes: registration and
 * provider sign-in. Calls are blocking from the caller's point of view; each
 * one drives its request on a fresh Tokio runtime so it can run on a plain
 * worker thread spawned by the form.
 */

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::egui_app::types::{RegisterRequest, SignInRequest, SignInResponse};
use crate::shared::error::AuthError;

/// The external collaborators behind the form.
///
/// Implementations block until the call settles; the form runs them off the
/// UI thread.
pub trait AuthBackend: Send + Sync + 'static {
    /// Create an account. Any `Err` is a rejection.
    fn register(&self, request: &RegisterRequest) -> Result<(), AuthError>;

    /// Sign in with `provider`. `Ok` means the provider answered, even if the
    /// answer carries an error marker.
    fn sign_in(&self, provider: &str, request: &SignInRequest) -> Result<SignInResponse, AuthError>;
}

/// [`AuthBackend`] talking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    config: Config,
    client: Client,
}

impl HttpAuthClient {
    /// Every call is bounded by the configured request timeout, so a stalled
    /// endpoint settles as [`AuthError::Network`] instead of holding the form.
    pub fn new(config: Config) -> Result<Self, AuthError> {
        let client = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl AuthBackend for HttpAuthClient {
    fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        let url = self.config.register_url();
        tracing::debug!(%url, email = %request.email, "posting registration");

        // Create a runtime for async execution
        let rt = Runtime::new()?;

        rt.block_on(async {
            let response = self.client.post(&url).json(request).send().await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(AuthError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok(())
        })
    }

    fn sign_in(&self, provider: &str, request: &SignInRequest) -> Result<SignInResponse, AuthError> {
        let url = self.config.sign_in_url(provider);
        tracing::debug!(%url, provider, redirect = request.redirect, "posting sign-in");

        let rt = Runtime::new()?;

        rt.block_on(async {
            let response = self.client.post(&url).json(request).send().await?;
            let status = response.status();
            let body = response.text().await?;

            // Identity providers report bad credentials with a 401 and a JSON
            // body; that is a resolved result, not a transport failure. The
            // HTTP status is recorded but never decides the outcome: only
            // `error` and `ok` in the body do.
            match serde_json::from_str::<SignInResponse>(&body) {
                Ok(mut result) => {
                    result.status.get_or_insert(status.as_u16());
                    Ok(result)
                }
                Err(_) if !status.is_success() => Err(AuthError::Status {
                    status: status.as_u16(),
                    body,
                }),
                Err(e) => Err(e.into()),
            }
        })
    }
}
