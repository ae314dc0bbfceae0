//! Full path: form → HTTP client → wiremock → notification

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use messenger_auth::egui_app::{AuthForm, Notification};

use crate::common::{client_for, client_with_timeout, drain};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_login_against_http_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signin/credentials"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ok": true }))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut form = AuthForm::new(client_for(&server));
    form.values.email = "a@b.com".to_string();
    form.values.password = "x".to_string();

    form.submit().unwrap();
    assert!(form.is_loading());

    let notifications = tokio::task::block_in_place(|| drain(&mut form));
    assert_eq!(notifications, vec![Notification::LoggedIn]);
    assert!(!form.is_loading());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_registration_server_error_against_http_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = AuthForm::new(client_for(&server));
    form.toggle_variant();
    form.values.name = "A".to_string();
    form.values.email = "a@b.com".to_string();
    form.values.password = "x".to_string();

    form.submit().unwrap();
    let notifications = tokio::task::block_in_place(|| drain(&mut form));
    assert_eq!(notifications, vec![Notification::SomethingWentWrong]);
    assert!(!form.is_loading());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_stalled_provider_clears_loading_and_allows_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signin/github"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ok": true }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut form = AuthForm::new(client_with_timeout(&server, Duration::from_millis(200)));

    form.social_action("github").unwrap();
    let notifications = tokio::task::block_in_place(|| drain(&mut form));
    assert_eq!(notifications, vec![Notification::SomethingWentWrong]);
    assert!(!form.is_loading());

    // Not stuck busy: the next action is dispatched.
    assert!(form.social_action("github").is_ok());
    assert!(form.is_loading());
}
