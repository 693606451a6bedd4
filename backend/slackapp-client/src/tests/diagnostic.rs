use crate::error::{ApiFieldError, SlackClientError};

fn field(message: &str, pointer: &str) -> ApiFieldError {
    ApiFieldError {
        message: message.to_string(),
        pointer: pointer.to_string(),
    }
}

/// **VALUE**: Verifies every Slack sub-error becomes its own diagnostic.
///
/// **WHY THIS MATTERS**: Users fix all problems in one pass only if all are shown.
///
/// **BUG THIS CATCHES**: Would catch only the first sub-error being reported.
#[test]
fn given_api_error_with_sub_errors_when_mapped_then_one_diagnostic_each() {
    // GIVEN
    let err = SlackClientError::api(
        "invalid_manifest",
        vec![
            field("must be shorter", "/display_information/name"),
            field("unknown scope", "/oauth_config/scopes/bot/0"),
        ],
    );

    // WHEN
    let diagnostics = err.diagnostics();

    // THEN
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].summary, "must be shorter");
    assert_eq!(
        diagnostics[0].pointer.as_deref(),
        Some("/display_information/name")
    );
    assert!(diagnostics[0].detail.contains("invalid_manifest"));
    assert_eq!(
        diagnostics[1].pointer.as_deref(),
        Some("/oauth_config/scopes/bot/0")
    );
}

/// **VALUE**: Verifies a failed rotation reports Slack's code and every sub-error.
///
/// **WHY THIS MATTERS**: `invalid_refresh_token` tells the user to issue a new token;
/// without it they only learn that "the API call failed".
///
/// **BUG THIS CATCHES**: Would catch the wrapped error being hidden behind the
/// credential context.
#[test]
fn given_rotation_failed_with_api_error_when_mapped_then_inner_diagnostics_follow() {
    // GIVEN
    let err = SlackClientError::rotation_failed(SlackClientError::api(
        "invalid_refresh_token",
        vec![
            field("token was already used", "/refresh_token"),
            field("token is revoked", ""),
        ],
    ));

    // WHEN
    let diagnostics = err.diagnostics();

    // THEN: Credential context, then one entry per sub-error
    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics[0].summary, "Failed to rotate the refresh token");
    assert!(diagnostics[0].pointer.is_none());
    assert_eq!(diagnostics[1].summary, "token was already used");
    assert_eq!(diagnostics[1].pointer.as_deref(), Some("/refresh_token"));
    assert!(diagnostics[1].detail.contains("invalid_refresh_token"));
    assert_eq!(diagnostics[2].summary, "token is revoked");
}

/// **VALUE**: Verifies a rotation rejected without sub-errors still shows the code.
///
/// **WHY THIS MATTERS**: Most rotation failures carry only the top-level code.
///
/// **BUG THIS CATCHES**: Would catch the code surviving only in the error's `source`.
#[test]
fn given_rotation_failed_without_sub_errors_when_mapped_then_code_is_reported() {
    let err = SlackClientError::rotation_failed(SlackClientError::api(
        "invalid_refresh_token",
        Vec::new(),
    ));

    let diagnostics = err.diagnostics();

    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics[1].summary.contains("invalid_refresh_token"));
}

/// **VALUE**: Verifies an API error with no sub-errors still names its code.
///
/// **WHY THIS MATTERS**: `app_not_found` has no pointer but is the whole story.
///
/// **BUG THIS CATCHES**: Would catch an empty diagnostic list.
#[test]
fn given_api_error_without_sub_errors_when_mapped_then_single_diagnostic_with_code() {
    let diagnostics = SlackClientError::api("app_not_found", Vec::new()).diagnostics();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].summary.contains("app_not_found"));
    assert!(diagnostics[0].pointer.is_none());
}

/// **VALUE**: Verifies non-API errors map to one generic diagnostic.
///
/// **WHY THIS MATTERS**: Transport failures have no field to point at.
///
/// **BUG THIS CATCHES**: Would catch non-API errors being dropped.
#[test]
fn given_transport_error_when_mapped_then_generic_diagnostic() {
    let err = SlackClientError::http_status(503, "unavailable");

    let diagnostics = err.diagnostics();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].summary, "Failed to call the Slack API.");
    assert!(diagnostics[0].detail.contains("HTTP 503"));
}

/// **VALUE**: Verifies empty pointers are not reported as locations.
///
/// **WHY THIS MATTERS**: An empty pointer would anchor the diagnostic at the root.
///
/// **BUG THIS CATCHES**: Would catch `Some("")` pointers.
#[test]
fn given_sub_error_without_pointer_when_mapped_then_pointer_is_none() {
    let err = SlackClientError::api("invalid_manifest", vec![field("bad", "")]);

    let diagnostics = err.diagnostics();

    assert!(diagnostics[0].pointer.is_none());
}
