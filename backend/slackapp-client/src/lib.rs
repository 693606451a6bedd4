//! Client for Slack's app manifest API.
//!
//! - [`SlackClient`] exposes create/update/export/delete of app manifests and
//!   `tooling.tokens.rotate`.
//! - [`credentials::CredentialCoordinator`] turns a refresh token into an
//!   access token on demand, rotating at most once at a time.
//! - [`response::decode_response`] reads Slack's `ok` envelope into either a
//!   typed value or [`SlackClientError::Api`].

pub mod config;
pub mod credentials;
pub mod diagnostic;
pub mod error;
pub mod response;
pub mod slack_client;
pub mod transport;

#[cfg(test)]
mod tests;

pub use config::ClientConfig;
pub use diagnostic::Diagnostic;
pub use error::{ApiFieldError, SlackClientError};
pub use slack_client::SlackClient;
