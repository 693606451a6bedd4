// Unit tests for CLI error classification

use crate::error::CliError;

use models::ModelError;
use slackapp_client::SlackClientError;

/// **VALUE**: Verifies exit codes separate Slack failures from local input problems.
///
/// **WHY THIS MATTERS**: CI scripts branch on the exit code to decide whether to retry.
///
/// **BUG THIS CATCHES**: Would catch all errors collapsing to a single exit code.
#[test]
fn given_errors_when_exit_code_requested_then_local_and_remote_differ() {
    // GIVEN
    let remote = CliError::from(SlackClientError::api("invalid_manifest", Vec::new()));
    let manifest = CliError::from(ModelError::validation("display_information.name is required"));
    let io = CliError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));

    // WHEN / THEN
    assert_eq!(remote.exit_code(), 1);
    assert_eq!(manifest.exit_code(), 2);
    assert_eq!(io.exit_code(), 2);
}

/// **VALUE**: Verifies IO errors record where they were converted.
///
/// **WHY THIS MATTERS**: The location points at the failing read or write.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from the `From` impl.
#[test]
fn given_io_error_when_converted_then_location_is_caller() {
    // WHEN
    let err = CliError::from(std::io::Error::other("disk full"));

    // THEN
    let CliError::Io { message, location } = err else {
        panic!("expected Io variant");
    };
    assert_eq!(message, "disk full");
    assert!(location.file.ends_with("error.rs"));
}

/// **VALUE**: Verifies client errors raised before any request exit as local problems.
///
/// **WHY THIS MATTERS**: A missing `SLACK_REFRESH_TOKEN` is fixed by the user, not by
/// retrying; scripts that retry on exit code 1 would loop forever.
///
/// **BUG THIS CATCHES**: Would catch every `SlackClientError` mapping to the remote code.
#[test]
fn given_local_client_errors_when_exit_code_requested_then_local_code() {
    // GIVEN
    let missing_token = CliError::from(SlackClientError::credential("no token configured"));
    let bad_url = CliError::from(SlackClientError::config("Invalid base URL format: ftp://x"));
    let rotation_rejected = CliError::from(SlackClientError::rotation_failed(
        SlackClientError::api("invalid_refresh_token", Vec::new()),
    ));

    // WHEN / THEN
    assert_eq!(missing_token.exit_code(), 2);
    assert_eq!(bad_url.exit_code(), 2);
    assert_eq!(rotation_rejected.exit_code(), 1);
}
