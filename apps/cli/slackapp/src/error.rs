use common::ErrorLocation;
use models::ModelError;
use slackapp_client::SlackClientError;

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the command line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error from this App
    #[error("CLI Error: {message} {location}")]
    Cli {
        message: String,
        location: ErrorLocation,
    },

    /// Reading a manifest or writing output failed
    #[error("IO Error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
    },

    /// Manifest failed to parse or validate locally
    #[error(transparent)]
    Manifest {
        #[from]
        source: ModelError,
    },

    /// Slack client failure (transport, API, credentials)
    #[error(transparent)]
    Client {
        #[from]
        source: SlackClientError,
    },
}

impl CliError {
    #[track_caller]
    pub fn cli(message: impl Into<String>) -> Self {
        CliError::Cli {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Process exit code: 1 for Slack/API failures, 2 for local input problems.
    ///
    /// Client errors raised before any request (missing tokens, bad base URL,
    /// unserializable manifest) count as local.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Client {
                source:
                    SlackClientError::Credential { source: None, .. }
                    | SlackClientError::Config { .. }
                    | SlackClientError::Manifest { .. },
            } => 2,
            CliError::Client { .. } => 1,
            CliError::Cli { .. } | CliError::Io { .. } | CliError::Manifest { .. } => 2,
        }
    }
}

impl From<std::io::Error> for CliError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        CliError::Io {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        CliError::Cli {
            message: format!("Failed to render output: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
