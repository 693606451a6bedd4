//! The app manifest tree submitted to and exported from `apps.manifest.*`.
//!
//! Optional fields are skipped on serialization when `None`, so a manifest
//! read from Slack and written back produces the same keys it was read with.
//! `App`, `Settings`, `Features` and `OauthConfig` also carry an `extra` map
//! for keys Slack adds before this model learns about them.

pub mod features;
pub mod lint;
pub mod oauth_config;
pub mod settings;

pub use features::{AppHome, BotUser, Features, Shortcut, ShortcutType, SlashCommand, WorkflowStep};
pub use oauth_config::{OauthConfig, Scopes};
pub use settings::{EventSubscriptions, Interactivity, Settings};

use crate::ModelError;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema version hints, serialized under `_metadata`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor_version: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayInformation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl DisplayInformation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_long_description(mut self, long_description: impl Into<String>) -> Self {
        self.long_description = Some(long_description.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

/// Root of a manifest. Only `display_information` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    #[serde(rename = "_metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub display_information: DisplayInformation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Features>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_config: Option<OauthConfig>,
    /// Top-level blocks this model does not name, such as `functions` or `workflows`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl App {
    pub fn new(display_information: DisplayInformation) -> Self {
        Self {
            display_information,
            ..Self::default()
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = Some(features);
        self
    }

    pub fn with_oauth_config(mut self, oauth_config: OauthConfig) -> Self {
        self.oauth_config = Some(oauth_config);
        self
    }

    /// Compact JSON, the form `apps.manifest.create` expects in its `manifest` field.
    #[track_caller]
    pub fn to_json_string(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    #[track_caller]
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, ModelError> {
        Ok(serde_json::to_vec(self)?)
    }

    #[track_caller]
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    #[track_caller]
    pub fn from_json_slice(json: &[u8]) -> Result<Self, ModelError> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Rejects values Slack is certain to refuse.
    ///
    /// # Errors
    /// Returns [`ModelError::Validation`] for a blank app name or a blank bot
    /// user display name.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.display_information.name.trim().is_empty() {
            return Err(ModelError::validation("display_information.name cannot be blank"));
        }

        let bot_user = self.features.as_ref().and_then(|f| f.bot_user.as_ref());
        if let Some(bot_user) = bot_user {
            if bot_user.display_name.trim().is_empty() {
                return Err(ModelError::validation(
                    "features.bot_user.display_name cannot be blank",
                ));
            }
        }

        Ok(())
    }
}
