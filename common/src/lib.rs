//! Shared primitives for the Slack app-configuration client.
//!
//! This crate holds the small building blocks every other crate leans on:
//! error locations, secrets that refuse to leak, HTTP status helpers and the
//! Unix-epoch timestamp used by token rotation.
//!
//! ## Architecture
//!
//! - **common** (this crate): Shared primitives
//! - **models**: Pure manifest data structures
//! - **slackapp-client**: Credentials, transport and API operations
//! - **slackapp**: Command-line wiring
//!
//! This layered architecture keeps concerns separated and makes testing easier.

pub mod error;
pub mod http_status;
pub mod redacted_secret;
pub mod unix_timestamp;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
pub use unix_timestamp::UnixTimestamp;

#[cfg(test)]
mod tests;
