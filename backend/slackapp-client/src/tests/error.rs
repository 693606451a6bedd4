use crate::error::SlackClientError;

use std::error::Error;

/// **VALUE**: Verifies error strings carry the raising location.
///
/// **WHY THIS MATTERS**: Without locations, "Decode Error" could come from any of
/// five operations.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` removal from constructors.
#[test]
fn given_decode_error_when_formatted_then_includes_location() {
    // GIVEN
    let err = SlackClientError::decode("unexpected body");

    // WHEN
    let text = err.to_string();

    // THEN
    assert!(text.contains("Decode Error: unexpected body"));
    assert!(text.contains("error.rs"), "should name this test file: {text}");
}

/// **VALUE**: Verifies rotation failures keep their cause in the source chain.
///
/// **WHY THIS MATTERS**: "Failed to rotate" alone does not tell whether the network
/// or Slack refused; the source does.
///
/// **BUG THIS CATCHES**: Would catch the `#[source]` attribute being dropped.
#[test]
fn given_rotation_failure_when_inspected_then_source_is_preserved() {
    // GIVEN
    let cause = SlackClientError::api("invalid_refresh_token", Vec::new());
    let err = SlackClientError::rotation_failed(cause);

    // WHEN
    let source = err.source().expect("should have a source");

    // THEN
    assert!(source.to_string().contains("invalid_refresh_token"));
    assert_eq!(err.error_category(), "credential");
}

/// **VALUE**: Verifies only transient failures are retryable.
///
/// **WHY THIS MATTERS**: Callers drive retry policy from this flag.
///
/// **BUG THIS CATCHES**: Would catch API errors being flagged retryable.
#[test]
fn given_errors_when_checked_for_retry_then_only_transient_are_retryable() {
    assert!(SlackClientError::http_status(429, "slow down").is_retryable());
    assert!(SlackClientError::http_status(503, "").is_retryable());
    assert!(!SlackClientError::http_status(404, "").is_retryable());
    assert!(!SlackClientError::api("invalid_manifest", Vec::new()).is_retryable());
    assert!(!SlackClientError::credential("none").is_retryable());
    assert_eq!(
        SlackClientError::http_status(429, "").status_code(),
        Some(429)
    );
}

/// **VALUE**: Verifies the API error display reports how many field errors exist.
///
/// **WHY THIS MATTERS**: Log lines show only the display string.
///
/// **BUG THIS CATCHES**: Would catch the count formatting breaking.
#[test]
fn given_api_error_when_formatted_then_includes_code_and_count() {
    let err = SlackClientError::api("invalid_manifest", Vec::new());

    assert!(err.to_string().contains("invalid_manifest (0 field errors)"));
}
