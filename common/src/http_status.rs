//! HTTP status classification for transport failures.
//!
//! Slack answers most API failures with `200 OK` and `"ok": false`, so a
//! status code only reaches error handling when the body was not an envelope.

/// HTTP status code carried by transport errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Slack's rate limiter answers with 429 and a `Retry-After` header.
    pub fn is_rate_limited(&self) -> bool {
        self.0 == 429
    }

    /// Codes a caller may reasonably retry after backing off.
    pub fn is_retryable(&self) -> bool {
        matches!(self.0, 429 | 502 | 503 | 504)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
