#![cfg(feature = "ssr")]

use std::time::Duration;

use app::config::ContactConfig;
use app::form_client::{FormClient, FormError};
use app::validation::ContactSubmission;
use assert_matches::assert_matches;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(endpoint: String) -> FormClient {
    let config = ContactConfig {
        endpoint,
        subject: "New message from portfolio".to_owned(),
        timeout: Duration::from_secs(5),
    };
    FormClient::new(&config).unwrap()
}

fn submission() -> ContactSubmission {
    ContactSubmission::new("Ada", "ada@example.com", "Hello from the test suite").unwrap()
}

#[tokio::test]
async fn test_submission_is_posted_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/f/movzlkwy"))
        .and(header("accept", "application/json"))
        .and(body_string_contains("_subject"))
        .and(body_string_contains("New message from portfolio"))
        .and(body_string_contains("ada@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(format!("{}/f/movzlkwy", server.uri()));
    assert_matches!(client.submit(&submission()).await, Ok(()));
}

#[tokio::test]
async fn test_non_success_status_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(format!("{}/f/movzlkwy", server.uri()));
    assert_matches!(
        client.submit(&submission()).await,
        Err(FormError::Rejected(status)) if status.as_u16() == 500
    );
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_transport_error() {
    let client = client_for("http://127.0.0.1:1/f/movzlkwy".to_owned());
    assert_matches!(
        client.submit(&submission()).await,
        Err(FormError::Transport(_))
    );
}
