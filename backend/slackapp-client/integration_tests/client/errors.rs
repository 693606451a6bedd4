use crate::helpers::{access_token_client, base_url};

use slackapp_client::{ClientConfig, SlackClient, SlackClientError};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies construction with no tokens fails without touching the network.
///
/// **WHY THIS MATTERS**: Misconfiguration should be reported as such, not as a 401.
///
/// **BUG THIS CATCHES**: Would catch lazy validation on first request.
#[tokio::test]
async fn given_no_tokens_when_client_built_then_credential_error_and_no_requests() {
    // GIVEN
    let server = MockServer::start().await;

    // WHEN
    let result = SlackClient::new(ClientConfig::default().with_base_url(base_url(&server)));

    // THEN
    assert!(matches!(result, Err(SlackClientError::Credential { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// **VALUE**: Verifies Slack's error list reaches the caller intact.
///
/// **WHY THIS MATTERS**: Each pointer is turned into a diagnostic on the right field.
///
/// **BUG THIS CATCHES**: Would catch the facade flattening Api errors into strings.
#[tokio::test]
async fn given_invalid_manifest_when_create_then_api_error_with_all_pointers() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "error": "invalid_manifest",
            "errors": [
                {"message": "name too long", "pointer": "/display_information/name"},
                {"message": "unknown event", "pointer": "/settings/event_subscriptions/bot_events/0"}
            ]
        })))
        .mount(&server)
        .await;
    let client = access_token_client(&server);

    // WHEN
    let err = client.create_manifest("{}").await.unwrap_err();

    // THEN
    let diagnostics = err.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics[1].pointer.as_deref(),
        Some("/settings/event_subscriptions/bot_events/0")
    );
}

/// **VALUE**: Verifies a non-envelope error page becomes a transport error with status.
///
/// **WHY THIS MATTERS**: 429 and 5xx pages are where a caller's retry policy applies.
///
/// **BUG THIS CATCHES**: Would catch such pages being reported as decode failures.
#[tokio::test]
async fn given_rate_limited_html_when_export_then_retryable_transport_error() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.export"))
        .respond_with(ResponseTemplate::new(429).set_body_string("<html>slow down</html>"))
        .mount(&server)
        .await;
    let client = access_token_client(&server);

    // WHEN
    let err = client.export_manifest("A1").await.unwrap_err();

    // THEN
    assert_eq!(err.status_code(), Some(429));
    assert!(err.is_retryable());
}

/// **VALUE**: Verifies a JSON envelope on a non-2xx status is still an API error.
///
/// **WHY THIS MATTERS**: Slack sometimes pairs `ok:false` with a 4xx status; the error
/// code is more useful than the status.
///
/// **BUG THIS CATCHES**: Would catch status checks shadowing the envelope.
#[tokio::test]
async fn given_error_envelope_with_4xx_when_delete_then_api_error() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.delete"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error": "invalid_app_id"
        })))
        .mount(&server)
        .await;
    let client = access_token_client(&server);

    // WHEN
    let err = client.delete_manifest("bad").await.unwrap_err();

    // THEN
    assert_eq!(err.api_error_code(), Some("invalid_app_id"));
}

/// **VALUE**: Verifies a malformed success body is a decode error.
///
/// **WHY THIS MATTERS**: Returning a half-filled manifest would overwrite real state.
///
/// **BUG THIS CATCHES**: Would catch lenient parsing of a missing `manifest`.
#[tokio::test]
async fn given_ok_body_without_manifest_when_export_then_decode_error() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.export"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;
    let client = access_token_client(&server);

    // WHEN
    let err = client.export_manifest("A1").await.unwrap_err();

    // THEN
    assert!(matches!(err, SlackClientError::Decode { .. }));
}

/// **VALUE**: Verifies a slow server trips the configured timeout.
///
/// **WHY THIS MATTERS**: A hung request must not block a caller forever.
///
/// **BUG THIS CATCHES**: Would catch the timeout not being applied to the HTTP client.
#[tokio::test]
async fn given_slow_server_when_timeout_elapses_then_timeout_transport_error() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.delete"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    let client = SlackClient::new(
        ClientConfig::default()
            .with_access_token("t")
            .with_base_url(base_url(&server))
            .with_timeout(Duration::from_millis(100)),
    )
    .unwrap();

    // WHEN
    let err = client.delete_manifest("A1").await.unwrap_err();

    // THEN
    assert_eq!(err.error_category(), "timeout");
    assert!(err.is_retryable());
}

/// **VALUE**: Verifies connection failures are transport errors.
///
/// **WHY THIS MATTERS**: Network outages are the other retryable class.
///
/// **BUG THIS CATCHES**: Would catch connection errors being mislabelled as decode.
#[tokio::test]
async fn given_unreachable_server_when_called_then_connection_error() {
    // GIVEN: Nothing listens on port 1
    let client = SlackClient::new(
        ClientConfig::default()
            .with_access_token("t")
            .with_base_url("http://127.0.0.1:1/api/"),
    )
    .unwrap();

    // WHEN
    let err = client.delete_manifest("A1").await.unwrap_err();

    // THEN
    assert!(matches!(err, SlackClientError::Transport { .. }));
    assert!(err.is_retryable());
}
