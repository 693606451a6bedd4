use crate::helpers::{
    REFRESH_TOKEN, ROTATED_ACCESS_TOKEN, ROTATED_REFRESH_TOKEN, exported_manifest,
    refresh_only_client, rotate_success_body,
};

use common::RedactedSecret;

use std::time::Duration;

use futures_util::future::join_all;
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_rotate(server: &MockServer, delay: Duration, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/api/tooling.tokens.rotate"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(format!("refresh_token={REFRESH_TOKEN}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(rotate_success_body())
                .set_delay(delay),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// **VALUE**: End-to-end: a refresh-only client rotates once, creates with the new
/// token, then exports reusing that token.
///
/// **WHY THIS MATTERS**: This is the standard CI setup; each extra rotation burns a
/// refresh token the user has to re-issue by hand.
///
/// **BUG THIS CATCHES**: Would catch the rotated token not being stored, or the old
/// token being sent after rotation.
#[tokio::test]
async fn given_refresh_only_client_when_create_then_export_then_one_rotation() {
    // GIVEN
    let server = MockServer::start().await;
    mount_rotate(&server, Duration::ZERO, 1).await;
    let bearer = format!("Bearer {ROTATED_ACCESS_TOKEN}");
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.create"))
        .and(header("authorization", bearer.as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ok": true, "app_id": "A1"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.export"))
        .and(header("authorization", bearer.as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true, "manifest": exported_manifest()})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = refresh_only_client(&server);

    // WHEN
    let created = client
        .create_manifest(r#"{"display_information":{"name":"A"}}"#)
        .await
        .unwrap();
    let exported = client.export_manifest(&created.app_id).await.unwrap();

    // THEN
    assert_eq!(created.app_id, "A1");
    assert_eq!(exported.display_information.name, "Exported App");
    let refresh = client.credentials().refresh_token().await.unwrap();
    assert_eq!(refresh.expose(), ROTATED_REFRESH_TOKEN);
}

/// **VALUE**: Verifies concurrent operations on one client share a single rotation.
///
/// **WHY THIS MATTERS**: Managing many apps in parallel through one client is the
/// normal case; the refresh token can be spent only once.
///
/// **BUG THIS CATCHES**: Would catch a race where several tasks rotate at once.
#[tokio::test]
async fn given_refresh_only_client_when_many_exports_run_concurrently_then_one_rotation() {
    // GIVEN: A slow rotation so all callers pile up behind it
    let server = MockServer::start().await;
    mount_rotate(&server, Duration::from_millis(200), 1).await;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.export"))
        .and(header(
            "authorization",
            format!("Bearer {ROTATED_ACCESS_TOKEN}").as_str(),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true, "manifest": exported_manifest()})),
        )
        .expect(10)
        .mount(&server)
        .await;
    let client = refresh_only_client(&server);

    // WHEN
    let app_ids: Vec<String> = (0..10).map(|i| format!("A{i}")).collect();
    let results = join_all(app_ids.iter().map(|id| {
        let client = client.clone();
        async move { client.export_manifest(id).await }
    }))
    .await;

    // THEN
    assert!(results.iter().all(Result::is_ok));
    server.verify().await;
}

/// **VALUE**: Verifies a rejected rotation surfaces as a credential error and keeps
/// the original refresh token.
///
/// **WHY THIS MATTERS**: A partially updated state would lose the only token that
/// might still work after a transient failure.
///
/// **BUG THIS CATCHES**: Would catch state being cleared before the response is read.
#[tokio::test]
async fn given_rotation_rejected_when_operation_called_then_credential_error_and_state_kept() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tooling.tokens.rotate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "error": "invalid_refresh_token"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.delete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(0)
        .mount(&server)
        .await;
    let client = refresh_only_client(&server);

    // WHEN
    let err = client.delete_manifest("A1").await.unwrap_err();

    // THEN
    assert_eq!(err.error_category(), "credential");
    assert!(
        err.diagnostics()
            .iter()
            .any(|d| d.summary.contains("invalid_refresh_token"))
    );
    let refresh = client.credentials().refresh_token().await.unwrap();
    assert_eq!(refresh.expose(), REFRESH_TOKEN);
    assert!(!client.credentials().snapshot().await.has_access_token);
}

/// **VALUE**: Verifies the public rotate operation leaves the client's own state alone.
///
/// **WHY THIS MATTERS**: Callers use it to rotate a token they manage themselves.
///
/// **BUG THIS CATCHES**: Would catch `rotate_token` overwriting the coordinator state.
#[tokio::test]
async fn given_client_when_rotate_token_called_then_returns_pair_without_storing() {
    // GIVEN
    let server = MockServer::start().await;
    mount_rotate(&server, Duration::ZERO, 1).await;
    let client = refresh_only_client(&server);

    // WHEN
    let response = client
        .rotate_token(&RedactedSecret::new(REFRESH_TOKEN))
        .await
        .unwrap();

    // THEN
    assert_eq!(response.token.expose(), ROTATED_ACCESS_TOKEN);
    assert_eq!(response.issued_at.as_secs(), 1_700_000_000);
    assert!(!client.credentials().snapshot().await.has_access_token);
}

/// **VALUE**: Verifies a `token_expired` answer makes the next call rotate.
///
/// **WHY THIS MATTERS**: Slack can expire a token before the recorded `exp`; the
/// client must recover on the caller's next attempt without a restart.
///
/// **BUG THIS CATCHES**: Would catch the rejected token being reused forever.
#[tokio::test]
async fn given_token_expired_error_when_called_again_then_rotates() {
    // GIVEN: A client that starts with an access token Slack will reject
    let server = MockServer::start().await;
    let client = slackapp_client::SlackClient::new(
        slackapp_client::ClientConfig::default()
            .with_access_token("xoxe.xoxp-1-expired")
            .with_refresh_token(REFRESH_TOKEN)
            .with_base_url(crate::helpers::base_url(&server)),
    )
    .unwrap();
    mount_rotate(&server, Duration::ZERO, 1).await;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.delete"))
        .and(header("authorization", "Bearer xoxe.xoxp-1-expired"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "error": "token_expired"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.delete"))
        .and(header(
            "authorization",
            format!("Bearer {ROTATED_ACCESS_TOKEN}").as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let first = client.delete_manifest("A1").await;
    let second = client.delete_manifest("A1").await;

    // THEN: First fails as reported by Slack, second succeeds after one rotation
    assert_eq!(first.unwrap_err().api_error_code(), Some("token_expired"));
    assert!(second.is_ok());
}
