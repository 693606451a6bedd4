use crate::UnixTimestamp;

use std::time::{Duration, UNIX_EPOCH};

/// **VALUE**: Verifies `iat`/`exp` integers decode to absolute times.
///
/// **WHY THIS MATTERS**: Token expiry decisions compare these against the clock.
///
/// **BUG THIS CATCHES**: Would catch milliseconds being assumed instead of seconds.
#[test]
fn given_epoch_seconds_when_deserialized_then_system_time_matches() {
    // GIVEN
    let json = "1700000000";

    // WHEN
    let ts: UnixTimestamp = serde_json::from_str(json).unwrap();

    // THEN
    assert_eq!(
        ts.as_system_time(),
        UNIX_EPOCH + Duration::from_secs(1_700_000_000)
    );
    assert_eq!(ts.as_secs(), 1_700_000_000);
    assert_eq!(ts.to_string(), "2023-11-14T22:13:20Z");
}

/// **VALUE**: Verifies non-integer timestamps are rejected.
///
/// **WHY THIS MATTERS**: A silently-zero expiry would force a rotation on every call.
///
/// **BUG THIS CATCHES**: Would catch lenient parsing of strings.
#[test]
fn given_string_timestamp_when_deserialized_then_fails() {
    let result: Result<UnixTimestamp, _> = serde_json::from_str(r#""soon""#);
    assert!(result.is_err());
}

/// **VALUE**: Verifies skew is applied when checking expiry.
///
/// **WHY THIS MATTERS**: A token that expires in one second is useless for a request
/// that takes two; the coordinator treats it as already expired.
///
/// **BUG THIS CATCHES**: Would catch the skew being subtracted instead of added.
#[test]
fn given_expiry_within_skew_when_checked_then_has_passed() {
    // GIVEN: Expiry 30s after "now"
    let now = UNIX_EPOCH + Duration::from_secs(1_000);
    let expiry = UnixTimestamp::from_secs(1_030).unwrap();

    // WHEN / THEN
    assert!(expiry.has_passed(now, Duration::from_secs(60)));
    assert!(!expiry.has_passed(now, Duration::from_secs(10)));
}
