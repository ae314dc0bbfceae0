//! Authentication form state.
//!
//! Holds the login/register mode, the typed values and the loading flag, and
//! dispatches the external calls. Each call runs on a worker thread and sends
//! its outcome back over a channel; the frame loop picks it up with
//! [`AuthForm::poll`].
//!
//! At most one call is in flight. A second submit or social action while
//! loading is refused with [`FormError::Busy`]. Dropping the form drops the
//! receiving end, so a late result is discarded instead of raising a toast.

use std::collections::BTreeSet;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use crate::egui_app::auth::AuthBackend;
use crate::egui_app::types::{
    Credentials, FormValues, Notification, RegisterRequest, SignInRequest, SignInResponse,
    Variant, CREDENTIALS_PROVIDER,
};
use crate::shared::error::{AuthError, Field, FormError};

/// What a worker reports when its call settles
#[derive(Debug)]
enum Outcome {
    Registered(Result<(), AuthError>),
    SignedIn {
        provider: String,
        result: Result<SignInResponse, AuthError>,
    },
}

impl Outcome {
    fn notification(self) -> Option<Notification> {
        match self {
            Outcome::Registered(Ok(())) => {
                tracing::info!("registration accepted");
                None
            }
            Outcome::Registered(Err(e)) => {
                tracing::warn!(error = %e, "registration failed");
                Some(Notification::SomethingWentWrong)
            }
            Outcome::SignedIn { provider, result: Ok(response) } => {
                match &response.error {
                    Some(marker) => tracing::warn!(%provider, %marker, "sign-in refused"),
                    None if response.ok => tracing::info!(%provider, "signed in"),
                    None => tracing::debug!(%provider, status = ?response.status, "sign-in returned neither ok nor error"),
                }
                response.notification()
            }
            Outcome::SignedIn { provider, result: Err(e) } => {
                tracing::warn!(%provider, error = %e, "sign-in call failed");
                Some(Notification::SomethingWentWrong)
            }
        }
    }
}

pub struct AuthForm<B: AuthBackend> {
    backend: Arc<B>,
    variant: Variant,
    /// Bound to the text inputs
    pub values: FormValues,
    loading: bool,
    invalid: BTreeSet<Field>,
    pending: Option<Receiver<Outcome>>,
}

impl<B: AuthBackend> AuthForm<B> {
    pub fn new(backend: B) -> Self {
        Self::with_backend(Arc::new(backend))
    }

    pub fn with_backend(backend: Arc<B>) -> Self {
        Self {
            backend,
            variant: Variant::Login,
            values: FormValues::default(),
            loading: false,
            invalid: BTreeSet::new(),
            pending: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the last submit found `field` empty
    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    /// Flip between login and register. An in-flight call is unaffected.
    pub fn toggle_variant(&mut self) {
        self.variant = self.variant.toggled();
        tracing::debug!(variant = ?self.variant, "auth form toggled");
    }

    /// Validate and dispatch according to the current mode.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.loading {
            return Err(FormError::Busy);
        }
        self.validate()?;

        match self.variant {
            Variant::Register => {
                let request = RegisterRequest::from(&self.values);
                tracing::info!(email = %request.email, "submitting registration");
                self.dispatch(move |backend| Outcome::Registered(backend.register(&request)));
            }
            Variant::Login => {
                let request = SignInRequest {
                    redirect: false,
                    credentials: Some(Credentials::from(&self.values)),
                };
                tracing::info!(email = %self.values.email, "submitting credential sign-in");
                self.dispatch_sign_in(CREDENTIALS_PROVIDER.to_string(), request);
            }
        }
        Ok(())
    }

    /// Sign in through an OAuth provider. Form values are not sent.
    pub fn social_action(&mut self, provider: &str) -> Result<(), FormError> {
        if self.loading {
            return Err(FormError::Busy);
        }

        tracing::info!(provider, "starting social sign-in");
        let request = SignInRequest {
            redirect: false,
            credentials: None,
        };
        self.dispatch_sign_in(provider.to_string(), request);
        Ok(())
    }

    /// Collect a settled call, if any. Call once per frame.
    pub fn poll(&mut self) -> Option<Notification> {
        let received = self.pending.as_ref()?.try_recv();
        match received {
            Ok(outcome) => self.settle(Some(outcome)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => self.settle(None),
        }
    }

    /// Like [`poll`](Self::poll) but waits up to `timeout` for the call to settle.
    pub fn poll_timeout(&mut self, timeout: Duration) -> Option<Notification> {
        let received = self.pending.as_ref()?.recv_timeout(timeout);
        match received {
            Ok(outcome) => self.settle(Some(outcome)),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => self.settle(None),
        }
    }

    fn settle(&mut self, outcome: Option<Outcome>) -> Option<Notification> {
        self.pending = None;
        self.loading = false;
        match outcome {
            Some(outcome) => outcome.notification(),
            None => {
                tracing::error!("auth worker exited without reporting");
                Some(Notification::SomethingWentWrong)
            }
        }
    }

    fn validate(&mut self) -> Result<(), FormError> {
        self.invalid = self
            .variant
            .visible_fields()
            .iter()
            .copied()
            .filter(|field| self.values.get(*field).trim().is_empty())
            .collect();

        match self.variant.visible_fields().iter().find(|f| self.invalid.contains(*f)) {
            Some(field) => {
                tracing::debug!(%field, "required field missing");
                Err(FormError::MissingField(*field))
            }
            None => Ok(()),
        }
    }

    fn dispatch_sign_in(&mut self, provider: String, request: SignInRequest) {
        self.dispatch(move |backend| {
            let result = backend.sign_in(&provider, &request);
            Outcome::SignedIn { provider, result }
        });
    }

    fn dispatch<F>(&mut self, call: F)
    where
        F: FnOnce(&B) -> Outcome + Send + 'static,
    {
        self.loading = true;

        let backend = Arc::clone(&self.backend);
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let outcome = call(backend.as_ref());
            if tx.send(outcome).is_err() {
                tracing::debug!("auth form dropped before call settled, discarding result");
            }
        });

        self.pending = Some(rx);
    }
}
