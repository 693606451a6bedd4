use crate::HttpStatusCode;

/// **VALUE**: Verifies only transient codes are reported as retryable.
///
/// **WHY THIS MATTERS**: Callers build their backoff policy on `is_retryable()`;
/// retrying a 400 would hammer Slack with a request that can never succeed.
///
/// **BUG THIS CATCHES**: Would catch 4xx codes other than 429 becoming retryable.
#[test]
fn given_status_codes_when_classified_then_only_transient_codes_retry() {
    // GIVEN / WHEN / THEN
    assert!(HttpStatusCode(429).is_retryable());
    assert!(HttpStatusCode(429).is_rate_limited());
    assert!(HttpStatusCode(503).is_retryable());
    assert!(!HttpStatusCode(400).is_retryable());
    assert!(!HttpStatusCode(500).is_retryable());
    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(404).is_client_error());
    assert!(HttpStatusCode(204).is_success());
}
