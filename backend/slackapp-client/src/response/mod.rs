//! Decoding of Slack's `{"ok": ...}` response envelope.
//!
//! Success and failure bodies share only the `ok` field, so a body is read
//! against the expected success shape first and, when that says `ok: false`
//! (or cannot be read at all), read again as [`ApiErrorResponse`].

use crate::error::{ApiFieldError, SlackClientError};

use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A response type that reports its own success through the `ok` discriminator.
pub trait SlackResponse: DeserializeOwned {
    fn is_ok(&self) -> bool;
}

/// Failure shape shared by every Slack Web API method.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub ok: bool,
    pub error: String,
    #[serde(default)]
    pub errors: Vec<ApiFieldError>,
}

impl ApiErrorResponse {
    #[track_caller]
    fn into_error(self) -> SlackClientError {
        SlackClientError::api(self.error, self.errors)
    }
}

/// Decode `body` into `T`, or into a [`SlackClientError::Api`] when Slack
/// reported `ok: false`.
///
/// # Errors
/// - [`SlackClientError::Api`] for a well-formed failure envelope
/// - [`SlackClientError::Decode`] when the body matches neither shape, or
///   claims failure without a readable `error` field
#[track_caller]
pub fn decode_response<T: SlackResponse>(body: &[u8]) -> Result<T, SlackClientError> {
    match serde_json::from_slice::<T>(body) {
        Ok(response) if response.is_ok() => Ok(response),
        Ok(_) => {
            let failure: ApiErrorResponse = serde_json::from_slice(body)?;
            debug!(
                "Slack API returned error '{}' with {} field errors",
                failure.error,
                failure.errors.len()
            );
            Err(failure.into_error())
        }
        Err(success_error) => match serde_json::from_slice::<ApiErrorResponse>(body) {
            Ok(failure) if !failure.ok => {
                debug!(
                    "Slack API returned error '{}' with {} field errors",
                    failure.error,
                    failure.errors.len()
                );
                Err(failure.into_error())
            }
            _ => Err(SlackClientError::from(success_error)),
        },
    }
}
