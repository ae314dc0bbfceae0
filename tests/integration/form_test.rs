//! Submit and social dispatch through `AuthForm`

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use messenger_auth::egui_app::types::{Credentials, RegisterRequest};
use messenger_auth::egui_app::{AuthForm, FormValues, Notification, Variant};
use messenger_auth::shared::{Field, FormError};

use crate::common::{drain, error_response, ok_response, FakeBackend, SignInReply};

fn register_values() -> FormValues {
    FormValues {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        password: "x".to_string(),
    }
}

fn login_form(backend: &Arc<FakeBackend>) -> AuthForm<FakeBackend> {
    let mut form = AuthForm::with_backend(Arc::clone(backend));
    form.values.email = "a@b.com".to_string();
    form.values.password = "x".to_string();
    form
}

#[test]
fn test_name_field_only_rendered_in_register_mode() {
    let (backend, _gate) = FakeBackend::accepting();
    let mut form = AuthForm::with_backend(backend);

    assert!(!form.variant().visible_fields().contains(&Field::Name));
    form.toggle_variant();
    assert_eq!(form.variant(), Variant::Register);
    assert!(form.variant().visible_fields().contains(&Field::Name));
}

#[test]
fn test_rejected_registration_raises_one_generic_failure() {
    let (backend, gate) = FakeBackend::new(true, SignInReply::Respond(ok_response()));
    let mut form = AuthForm::with_backend(Arc::clone(&backend));
    form.toggle_variant();
    form.values = register_values();

    form.submit().unwrap();
    assert!(form.is_loading());

    gate.release();
    let notifications = drain(&mut form);

    assert_eq!(notifications, vec![Notification::SomethingWentWrong]);
    assert!(!form.is_loading());
    assert_eq!(
        *backend.registrations.lock().unwrap(),
        vec![RegisterRequest {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        }]
    );
    assert_eq!(backend.sign_in_count(), 0);
}

#[test]
fn test_accepted_registration_is_silent() {
    let (backend, gate) = FakeBackend::accepting();
    let mut form = AuthForm::with_backend(Arc::clone(&backend));
    form.toggle_variant();
    form.values = register_values();

    form.submit().unwrap();
    gate.release();

    assert!(drain(&mut form).is_empty());
    assert!(!form.is_loading());
    assert_eq!(backend.registration_count(), 1);
}

#[test]
fn test_credential_login_sends_payload_without_redirect() {
    let (backend, gate) =
        FakeBackend::new(false, SignInReply::Respond(error_response("CredentialsSignin")));
    let mut form = login_form(&backend);

    form.submit().unwrap();
    assert!(form.is_loading());
    gate.release();

    assert_eq!(drain(&mut form), vec![Notification::InvalidCredentials]);
    assert!(!form.is_loading());

    let calls = backend.sign_ins.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (provider, request) = &calls[0];
    assert_eq!(provider, "credentials");
    assert!(!request.redirect);
    assert_eq!(
        request.credentials,
        Some(Credentials {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        })
    );
    assert_eq!(backend.registration_count(), 0);
}

#[test]
fn test_credential_login_success_notifies_once() {
    let (backend, gate) = FakeBackend::accepting();
    let mut form = login_form(&backend);

    form.submit().unwrap();
    gate.release();

    assert_eq!(drain(&mut form), vec![Notification::LoggedIn]);
    assert_eq!(backend.sign_in_count(), 1);
}

#[test]
fn test_sign_in_with_neither_ok_nor_error_is_silent() {
    let (backend, gate) =
        FakeBackend::new(false, SignInReply::Respond(Default::default()));
    let mut form = login_form(&backend);

    form.submit().unwrap();
    gate.release();

    assert!(drain(&mut form).is_empty());
    assert!(!form.is_loading());
}

#[test]
fn test_unavailable_identity_provider_raises_generic_failure() {
    let (backend, gate) = FakeBackend::new(false, SignInReply::Unavailable);
    let mut form = login_form(&backend);

    form.submit().unwrap();
    gate.release();

    assert_eq!(drain(&mut form), vec![Notification::SomethingWentWrong]);
    assert!(!form.is_loading());
}

#[test]
fn test_social_github_uses_provider_without_payload() {
    for (response, expected) in [
        (ok_response(), Notification::LoggedIn),
        (error_response("OAuthSignin"), Notification::InvalidCredentials),
    ] {
        let (backend, gate) = FakeBackend::new(false, SignInReply::Respond(response));
        let mut form = login_form(&backend);

        form.social_action("github").unwrap();
        assert!(form.is_loading());
        gate.release();

        assert_eq!(drain(&mut form), vec![expected]);
        assert!(!form.is_loading());

        let calls = backend.sign_ins.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "github");
        assert_eq!(calls[0].1.credentials, None);
        assert!(!calls[0].1.redirect);
    }
}

#[test]
fn test_social_action_needs_no_form_values() {
    let (backend, gate) = FakeBackend::accepting();
    let mut form = AuthForm::with_backend(Arc::clone(&backend));

    form.social_action("google").unwrap();
    gate.release();
    assert_eq!(drain(&mut form), vec![Notification::LoggedIn]);
    assert_eq!(backend.sign_ins.lock().unwrap()[0].0, "google");
}

#[test]
fn test_overlapping_actions_are_refused() {
    let (backend, gate) = FakeBackend::accepting();
    let mut form = login_form(&backend);

    form.submit().unwrap();
    assert_eq!(form.submit(), Err(FormError::Busy));
    assert_eq!(form.social_action("github"), Err(FormError::Busy));

    gate.release();
    assert_eq!(drain(&mut form), vec![Notification::LoggedIn]);
    assert_eq!(backend.sign_in_count(), 1);

    // Idle again: a new submit goes through.
    form.submit().unwrap();
    gate.release();
    assert_eq!(drain(&mut form), vec![Notification::LoggedIn]);
    assert_eq!(backend.sign_in_count(), 2);
}

#[test]
fn test_toggle_during_call_keeps_result() {
    let (backend, gate) = FakeBackend::accepting();
    let mut form = login_form(&backend);

    form.submit().unwrap();
    form.toggle_variant();
    assert!(form.is_loading());
    gate.release();

    assert_eq!(drain(&mut form), vec![Notification::LoggedIn]);
    assert_eq!(form.variant(), Variant::Register);
}

#[test]
fn test_empty_fields_issue_no_call() {
    let (backend, gate) = FakeBackend::accepting();
    let mut form = AuthForm::with_backend(Arc::clone(&backend));
    form.values.email = "   ".to_string();

    assert_eq!(form.submit(), Err(FormError::MissingField(Field::Email)));
    assert!(!form.is_loading());
    assert!(form.is_invalid(Field::Email));
    assert!(form.is_invalid(Field::Password));
    assert_eq!(backend.sign_in_count(), 0);

    form.values.email = "a@b.com".to_string();
    form.values.password = "x".to_string();
    form.submit().unwrap();
    assert!(!form.is_invalid(Field::Email));
    gate.release();
    assert_eq!(drain(&mut form), vec![Notification::LoggedIn]);
}

#[test]
fn test_dropped_form_worker_exits_after_late_result() {
    let (backend, gate) = FakeBackend::accepting();
    let mut form = login_form(&backend);

    form.submit().unwrap();
    drop(form);
    // Form gone; only the test and the held worker share the backend.
    assert_eq!(Arc::strong_count(&backend), 2);
    gate.release();

    // The worker finishes its call, fails to deliver and exits, releasing its
    // handle. A worker stuck on the send would keep the count at 2.
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    while Arc::strong_count(&backend) > 1 && std::time::Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(Arc::strong_count(&backend), 1);
    assert_eq!(backend.sign_in_count(), 1);
}
