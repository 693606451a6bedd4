use crate::error::SlackClientError;
use crate::response::decode_response;
use crate::slack_client::{
    CreateManifestResponse, DeleteManifestResponse, ExportManifestResponse, RotateTokenResponse,
};

/// **VALUE**: Verifies a success body decodes into the typed response.
///
/// **WHY THIS MATTERS**: Slack omits fields freely; `{"ok":true,"app_id":"A1"}` is a
/// valid create response even without credentials.
///
/// **BUG THIS CATCHES**: Would catch `credentials` becoming a required field.
#[test]
fn given_minimal_success_body_when_decoded_as_create_then_returns_app_id() {
    // GIVEN
    let body = br#"{"ok":true,"app_id":"A1"}"#;

    // WHEN
    let response: CreateManifestResponse = decode_response(body).unwrap();

    // THEN
    assert_eq!(response.app_id, "A1");
    assert!(response.credentials.is_none());
    assert!(response.oauth_authorize_url.is_none());
}

/// **VALUE**: Verifies an `ok:false` body becomes `Api` with its sub-errors intact.
///
/// **WHY THIS MATTERS**: The pointer is how a user finds the bad manifest field.
///
/// **BUG THIS CATCHES**: Would catch the error body being parsed into the success type
/// and silently returning empty values.
#[test]
fn given_failure_body_when_decoded_then_returns_api_error_with_sub_error() {
    // GIVEN
    let body = br#"{"ok":false,"error":"invalid_manifest","errors":[{"message":"bad name","pointer":"display_information.name"}]}"#;

    // WHEN
    let result: Result<CreateManifestResponse, _> = decode_response(body);

    // THEN
    match result {
        Err(SlackClientError::Api { error, errors, .. }) => {
            assert_eq!(error, "invalid_manifest");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].message, "bad name");
            assert_eq!(errors[0].pointer, "display_information.name");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

/// **VALUE**: Verifies multiple sub-errors survive in order.
///
/// **WHY THIS MATTERS**: Reporting only the first problem forces one fix-and-retry
/// cycle per mistake.
///
/// **BUG THIS CATCHES**: Would catch truncation or reordering of `errors`.
#[test]
fn given_failure_with_many_sub_errors_when_decoded_then_all_are_kept_in_order() {
    // GIVEN
    let body = br#"{"ok":false,"error":"invalid_manifest","errors":[
        {"message":"first","pointer":"/a"},
        {"message":"second","pointer":"/b"},
        {"message":"third","pointer":"/c"}]}"#;

    // WHEN
    let err = decode_response::<DeleteManifestResponse>(body).unwrap_err();

    // THEN
    let messages: Vec<&str> = err.api_errors().iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

/// **VALUE**: Verifies failure bodies decode even when the success type has required
/// fields the failure lacks.
///
/// **WHY THIS MATTERS**: Export's success shape requires `manifest`; an error body
/// never has one and must still surface as `Api`, not `Decode`.
///
/// **BUG THIS CATCHES**: Would catch the decoder giving up after the first pass fails.
#[test]
fn given_failure_body_when_decoded_as_type_with_required_fields_then_api_error() {
    // GIVEN
    let body = br#"{"ok":false,"error":"app_not_found"}"#;

    // WHEN
    let err = decode_response::<ExportManifestResponse>(body).unwrap_err();

    // THEN
    assert_eq!(err.api_error_code(), Some("app_not_found"));
    assert!(err.api_errors().is_empty());
}

/// **VALUE**: Verifies a failure envelope with no `error` field is a decode error.
///
/// **WHY THIS MATTERS**: Returning an `Api` error with an empty code hides the fact
/// that Slack sent something unexpected.
///
/// **BUG THIS CATCHES**: Would catch `error` gaining `#[serde(default)]`.
#[test]
fn given_malformed_failure_body_when_decoded_then_decode_error() {
    // GIVEN
    let body = br#"{"ok":false,"errors":"not-a-list"}"#;

    // WHEN
    let result = decode_response::<DeleteManifestResponse>(body);

    // THEN
    assert!(matches!(result, Err(SlackClientError::Decode { .. })));
}

/// **VALUE**: Verifies non-JSON bodies produce a decode error.
///
/// **WHY THIS MATTERS**: Proxies return HTML error pages; these must not be mistaken
/// for API errors.
///
/// **BUG THIS CATCHES**: Would catch panics or empty Api errors on garbage input.
#[test]
fn given_non_json_body_when_decoded_then_decode_error() {
    let result = decode_response::<DeleteManifestResponse>(b"<html>502</html>");
    assert!(matches!(result, Err(SlackClientError::Decode { .. })));

    let result = decode_response::<DeleteManifestResponse>(br#"{"app_id":"A1"}"#);
    assert!(matches!(result, Err(SlackClientError::Decode { .. })));
}

/// **VALUE**: Verifies rotation responses decode timestamps and hide tokens.
///
/// **WHY THIS MATTERS**: The coordinator stores `exp` to know when to rotate again.
///
/// **BUG THIS CATCHES**: Would catch the `iat`/`exp` renames going missing.
#[test]
fn given_rotate_body_when_decoded_then_tokens_and_times_are_set() {
    // GIVEN
    let body = br#"{"ok":true,"token":"xoxe.xoxp-new","refresh_token":"xoxe-1-new","team_id":"T1","user_id":"U1","iat":1700000000,"exp":1700043200}"#;

    // WHEN
    let response: RotateTokenResponse = decode_response(body).unwrap();

    // THEN
    assert_eq!(response.token.expose(), "xoxe.xoxp-new");
    assert_eq!(response.refresh_token.expose(), "xoxe-1-new");
    assert_eq!(response.issued_at.as_secs(), 1_700_000_000);
    assert_eq!(response.expires_at.as_secs(), 1_700_043_200);
    assert!(!format!("{response:?}").contains("xoxe-1-new"));
}
