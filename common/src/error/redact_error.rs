use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret is pushed through a path that would expose it.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Secret Serialization Refused: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}
