//! Error taxonomy for every client operation.
//!
//! Key design decisions:
//! - Slack's `ok: false` envelopes keep their full, ordered sub-error list
//! - HTTP status codes stored directly (not parsed from strings)
//! - `is_retryable()` classifies only; the client itself never retries
//! - All errors include ErrorLocation, captured with `#[track_caller]`

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use serde::Deserialize;
use thiserror::Error as ThisError;

/// One field-level entry of an `ok: false` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiFieldError {
    pub message: String,
    /// Location of the offending input, e.g. `/display_information/name`.
    #[serde(default)]
    pub pointer: String,
}

#[derive(Debug, ThisError)]
pub enum SlackClientError {
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        status_code: Option<HttpStatusCode>,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Slack API Error: {error} ({count} field errors) {location}", count = .errors.len())]
    Api {
        error: String,
        errors: Vec<ApiFieldError>,
        location: ErrorLocation,
    },

    #[error("Credential Error: {message} {location}")]
    Credential {
        message: String,
        #[source]
        source: Option<Box<SlackClientError>>,
        location: ErrorLocation,
    },

    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    #[error("Manifest Error: {source}")]
    Manifest {
        #[from]
        source: models::ModelError,
    },
}

impl SlackClientError {
    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        SlackClientError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(error: impl Into<String>, errors: Vec<ApiFieldError>) -> Self {
        SlackClientError::Api {
            error: error.into(),
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn credential(message: impl Into<String>) -> Self {
        SlackClientError::Credential {
            message: message.into(),
            source: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wraps a failed rotation so the caller sees both the credential context
    /// and the transport or API failure underneath.
    #[track_caller]
    pub fn rotation_failed(source: SlackClientError) -> Self {
        SlackClientError::Credential {
            message: String::from("Failed to rotate the refresh token"),
            source: Some(Box::new(source)),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        SlackClientError::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Non-2xx response whose body was not a Slack envelope.
    #[track_caller]
    pub fn http_status(status_code: u16, body: impl Into<String>) -> Self {
        SlackClientError::Transport {
            message: format!("HTTP {status_code} - {}", body.into()),
            status_code: Some(HttpStatusCode(status_code)),
            is_timeout: false,
            is_connection: false,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Check if this error is retryable based on error category, NOT string content.
    pub fn is_retryable(&self) -> bool {
        match self {
            SlackClientError::Transport {
                status_code: Some(status_code),
                ..
            } => status_code.is_retryable(),
            SlackClientError::Transport {
                is_timeout,
                is_connection,
                ..
            } => *is_timeout || *is_connection,
            SlackClientError::Decode { .. } => false,
            SlackClientError::Api { .. } => false,
            SlackClientError::Credential { .. } => false,
            SlackClientError::Config { .. } => false,
            SlackClientError::Manifest { .. } => false,
        }
    }

    /// Get error category for log fields.
    pub fn error_category(&self) -> &'static str {
        match self {
            SlackClientError::Transport { is_timeout: true, .. } => "timeout",
            SlackClientError::Transport { is_connection: true, .. } => "connection",
            SlackClientError::Transport { .. } => "transport",
            SlackClientError::Decode { .. } => "decode",
            SlackClientError::Api { .. } => "api",
            SlackClientError::Credential { .. } => "credential",
            SlackClientError::Config { .. } => "config",
            SlackClientError::Manifest { .. } => "manifest",
        }
    }

    /// Field-level sub-errors reported by Slack, in response order.
    pub fn api_errors(&self) -> &[ApiFieldError] {
        match self {
            SlackClientError::Api { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Slack's top-level error code, e.g. `invalid_manifest`.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            SlackClientError::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            SlackClientError::Transport {
                status_code: Some(status_code),
                ..
            } => Some(status_code.0),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SlackClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        // Check for specific error types BEFORE converting to string
        if error.is_decode() {
            return SlackClientError::Decode {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        SlackClientError::Transport {
            message: error.to_string(),
            status_code: error.status().map(|s| HttpStatusCode(s.as_u16())),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SlackClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        SlackClientError::Decode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for SlackClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        SlackClientError::Config {
            message: format!("Invalid URL: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
