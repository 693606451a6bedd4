use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppHome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_tab_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_tab_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_tab_read_only_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotUser {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_online: Option<bool>,
}

impl BotUser {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            always_online: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutType {
    Message,
    Global,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub name: String,
    pub callback_id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ShortcutType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashCommand {
    pub command: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_escape: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_hint: Option<String>,
}

impl SlashCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub name: String,
    pub callback_id: String,
}

/// Lists keep their input order; `Some(vec![])` is sent as `[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_home: Option<AppHome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_user: Option<BotUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcuts: Option<Vec<Shortcut>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slash_commands: Option<Vec<SlashCommand>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unfurl_domains: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_steps: Option<Vec<WorkflowStep>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
