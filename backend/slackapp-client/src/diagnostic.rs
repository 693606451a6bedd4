//! Map client errors onto user-facing diagnostics.
//!
//! Slack can reject one manifest for several reasons at once. Each field-level
//! sub-error becomes its own diagnostic so the caller can attach it to the
//! input location named by its pointer.

use crate::error::SlackClientError;

use std::fmt;

const GENERIC_SUMMARY: &str = "Failed to call the Slack API.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub summary: String,
    pub detail: String,
    /// JSON pointer into the submitted manifest, when Slack named one.
    pub pointer: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pointer {
            Some(pointer) => write!(f, "{} at {}", self.summary, pointer),
            None => write!(f, "{}: {}", self.summary, self.detail),
        }
    }
}

impl SlackClientError {
    /// One diagnostic per Slack sub-error, or a single summary diagnostic.
    ///
    /// A failed rotation yields its own context followed by the diagnostics of
    /// the failure underneath.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            SlackClientError::Api { error, errors, .. } if !errors.is_empty() => errors
                .iter()
                .map(|e| Diagnostic {
                    summary: e.message.clone(),
                    detail: format!("Slack rejected the value at '{}' ({error})", e.pointer),
                    pointer: (!e.pointer.is_empty()).then(|| e.pointer.clone()),
                })
                .collect(),
            SlackClientError::Api { error, .. } => vec![Diagnostic {
                summary: format!("Slack API returned an error: {error}"),
                detail: self.to_string(),
                pointer: None,
            }],
            SlackClientError::Credential {
                message,
                source: Some(inner),
                ..
            } => {
                // Context first, then whatever Slack or the network reported
                let mut diagnostics = vec![Diagnostic {
                    summary: message.clone(),
                    detail: self.to_string(),
                    pointer: None,
                }];
                diagnostics.extend(inner.diagnostics());
                diagnostics
            }
            other => vec![Diagnostic {
                summary: GENERIC_SUMMARY.to_string(),
                detail: other.to_string(),
                pointer: None,
            }],
        }
    }
}
