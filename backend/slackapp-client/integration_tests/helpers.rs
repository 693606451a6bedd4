//! Test helpers for client integration tests.
//!
//! - Mock Slack server with the `/api/` prefix
//! - Canned rotation and envelope bodies
//! - Client construction against the mock

use slackapp_client::{ClientConfig, SlackClient};

use serde_json::{Value, json};
use wiremock::MockServer;

pub const REFRESH_TOKEN: &str = "xoxe-1-initial";
pub const ROTATED_ACCESS_TOKEN: &str = "xoxe.xoxp-1-rotated";
pub const ROTATED_REFRESH_TOKEN: &str = "xoxe-1-next";
pub const STATIC_ACCESS_TOKEN: &str = "xoxe.xoxp-1-static";

/// Year 2100; never expires during a test run.
pub const FAR_FUTURE_EXP: i64 = 4_102_444_800;

pub fn base_url(server: &MockServer) -> String {
    format!("{}/api/", server.uri())
}

pub fn refresh_only_client(server: &MockServer) -> SlackClient {
    SlackClient::new(
        ClientConfig::default()
            .with_refresh_token(REFRESH_TOKEN)
            .with_base_url(base_url(server)),
    )
    .expect("client should build")
}

pub fn access_token_client(server: &MockServer) -> SlackClient {
    SlackClient::new(
        ClientConfig::default()
            .with_access_token(STATIC_ACCESS_TOKEN)
            .with_base_url(base_url(server)),
    )
    .expect("client should build")
}

pub fn rotate_success_body() -> Value {
    json!({
        "ok": true,
        "token": ROTATED_ACCESS_TOKEN,
        "refresh_token": ROTATED_REFRESH_TOKEN,
        "team_id": "T123",
        "user_id": "U123",
        "iat": 1_700_000_000,
        "exp": FAR_FUTURE_EXP
    })
}

pub fn exported_manifest() -> Value {
    json!({
        "_metadata": {"major_version": 1, "minor_version": 1},
        "display_information": {"name": "Exported App"},
        "features": {
            "bot_user": {"display_name": "exported", "always_online": false},
            "slash_commands": [{"command": "/hello", "description": "Say hi"}]
        },
        "oauth_config": {"scopes": {"bot": ["commands"]}},
        "settings": {"socket_mode_enabled": true, "org_deploy_enabled": false}
    })
}
