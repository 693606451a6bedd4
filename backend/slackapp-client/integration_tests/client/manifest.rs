use crate::helpers::{
    STATIC_ACCESS_TOKEN, access_token_client, exported_manifest,
};

use models::{App, DisplayInformation};

use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies create sends the manifest text with bearer auth and JSON content type.
///
/// **WHY THIS MATTERS**: Slack rejects requests without the exact header set.
///
/// **BUG THIS CATCHES**: Would catch a missing `Authorization` or `User-Agent` header.
#[tokio::test]
async fn given_access_token_client_when_create_manifest_then_returns_credentials() {
    // GIVEN
    let server = MockServer::start().await;
    let manifest = r#"{"display_information":{"name":"New App"}}"#;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.create"))
        .and(header("authorization", format!("Bearer {STATIC_ACCESS_TOKEN}").as_str()))
        .and(header("content-type", "application/json"))
        .and(header_regex("user-agent", "^slackapp-client/"))
        .and(body_json(json!({"manifest": manifest})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "app_id": "A0123",
            "credentials": {
                "client_id": "123.456",
                "client_secret": "secret",
                "verification_token": "verify",
                "signing_secret": "signing"
            },
            "oauth_authorize_url": "https://slack.com/oauth/v2/authorize?client_id=123.456"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = access_token_client(&server);

    // WHEN
    let response = client.create_manifest(manifest).await.unwrap();

    // THEN
    assert_eq!(response.app_id, "A0123");
    let credentials = response.credentials.unwrap();
    assert_eq!(credentials.client_id, "123.456");
    assert_eq!(credentials.signing_secret.expose(), "signing");
    assert!(response.oauth_authorize_url.unwrap().contains("authorize"));
}

/// **VALUE**: Verifies update hits `apps.manifest.update`, not create.
///
/// **WHY THIS MATTERS**: Posting an update to the create endpoint makes a duplicate app.
///
/// **BUG THIS CATCHES**: Would catch a copy-pasted method name.
#[tokio::test]
async fn given_app_id_when_update_manifest_then_reports_permission_change() {
    // GIVEN
    let server = MockServer::start().await;
    let app = App::new(DisplayInformation::new("Renamed"));
    let manifest = app.to_json_string().unwrap();
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.update"))
        .and(body_json(json!({"app_id": "A0123", "manifest": manifest})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "app_id": "A0123",
            "permissions_updated": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = access_token_client(&server);

    // WHEN
    let response = client.update_manifest_from_app("A0123", &app).await.unwrap();

    // THEN
    assert_eq!(response.app_id, "A0123");
    assert!(response.permissions_updated);
}

/// **VALUE**: Verifies export returns a typed manifest that re-serializes identically.
///
/// **WHY THIS MATTERS**: Drift detection diffs the re-serialized export against config.
///
/// **BUG THIS CATCHES**: Would catch lost or defaulted fields in the export path.
#[tokio::test]
async fn given_existing_app_when_export_manifest_then_round_trips() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.export"))
        .and(body_json(json!({"app_id": "A0123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "manifest": exported_manifest()
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = access_token_client(&server);

    // WHEN
    let app = client.export_manifest("A0123").await.unwrap();

    // THEN
    assert_eq!(app.display_information.name, "Exported App");
    let rewritten: Value = serde_json::from_str(&app.to_json_string().unwrap()).unwrap();
    assert_eq!(rewritten, exported_manifest());
}

/// **VALUE**: Verifies delete succeeds on a bare `{"ok":true}`.
///
/// **WHY THIS MATTERS**: Delete has no payload; requiring one would fail every delete.
///
/// **BUG THIS CATCHES**: Would catch extra required fields on the delete response.
#[tokio::test]
async fn given_existing_app_when_delete_manifest_then_ok() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/apps.manifest.delete"))
        .and(body_json(json!({"app_id": "A0123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;
    let client = access_token_client(&server);

    // WHEN / THEN
    client.delete_manifest("A0123").await.unwrap();
}
