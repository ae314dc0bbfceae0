/**
 * Shared Types Module
 *
 * Form mode, form values, wire payloads for the two external calls, and the
 * notifications the form can raise.
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::Field;

/// Provider id used for email/password sign-in
pub const CREDENTIALS_PROVIDER: &str = "credentials";

/// Which form is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Email + password, submit signs in
    #[default]
    Login,
    /// Name + email + password, submit registers
    Register,
}

impl Variant {
    /// The other variant
    pub fn toggled(self) -> Self {
        match self {
            Variant::Login => Variant::Register,
            Variant::Register => Variant::Login,
        }
    }

    /// Fields rendered (and required) in this mode, in display order
    pub fn visible_fields(self) -> &'static [Field] {
        match self {
            Variant::Login => &[Field::Email, Field::Password],
            Variant::Register => &[Field::Name, Field::Email, Field::Password],
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Variant::Login => "Sign in",
            Variant::Register => "Register",
        }
    }

    /// Caption next to the toggle link
    pub fn toggle_caption(self) -> &'static str {
        match self {
            Variant::Login => "New to Messenger?",
            Variant::Register => "Already have an account?",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Variant::Login => "Create an account",
            Variant::Register => "Login",
        }
    }
}

/// Values typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

/// Registration payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<&FormValues> for RegisterRequest {
    fn from(values: &FormValues) -> Self {
        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            password: values.password.clone(),
        }
    }
}

/// Email/password pair sent to the credentials provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl From<&FormValues> for Credentials {
    fn from(values: &FormValues) -> Self {
        Self {
            email: values.email.clone(),
            password: values.password.clone(),
        }
    }
}

/// Sign-in request body. Credentials are inlined next to `redirect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub redirect: bool,
    #[serde(flatten)]
    pub credentials: Option<Credentials>,
}

/// Result of a sign-in call that reached the identity provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub url: Option<String>,
}

impl SignInResponse {
    /// Error marker wins over `ok`; a result with neither raises nothing.
    pub fn notification(&self) -> Option<Notification> {
        if self.error.is_some() {
            Some(Notification::InvalidCredentials)
        } else if self.ok {
            Some(Notification::LoggedIn)
        } else {
            None
        }
    }
}

/// The three user-visible outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Registration or transport failure
    SomethingWentWrong,
    InvalidCredentials,
    LoggedIn,
}

impl Notification {
    pub fn message(self) -> &'static str {
        match self {
            Notification::SomethingWentWrong => "Something went wrong!",
            Notification::InvalidCredentials => "Invalid credentials",
            Notification::LoggedIn => "Logged in!",
        }
    }

    pub fn is_error(self) -> bool {
        !matches!(self, Notification::LoggedIn)
    }
}
