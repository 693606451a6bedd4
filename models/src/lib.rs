//! Slack app manifest data structures.
//!
//! Every optional manifest field is an `Option`: `None` is "not configured" and
//! is omitted from the JSON entirely, while `Some(false)`, `Some("")` and
//! `Some(vec![])` are explicit values that survive a round-trip.

pub mod error;
pub mod manifest;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use manifest::lint::{ManifestWarning, MAX_SHORTCUT_COUNT, MAX_SLASH_COMMAND_COUNT};
pub use manifest::{
    App, AppHome, BotUser, DisplayInformation, EventSubscriptions, Features, Interactivity,
    Metadata, OauthConfig, Scopes, Settings, Shortcut, ShortcutType, SlashCommand, WorkflowStep,
};

#[cfg(test)]
mod tests;
