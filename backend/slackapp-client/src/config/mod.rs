//! Client configuration from explicit values and the process environment.
//!
//! # Sources (later wins)
//! 1. `.env` file in the working directory (optional, loaded with dotenvy)
//! 2. Process environment: `SLACK_APP_CONFIGURATION_TOKEN`,
//!    `SLACK_REFRESH_TOKEN`, `SLACK_BASE_URL`
//! 3. Values set explicitly on a [`ClientConfig`] and merged with
//!    [`ClientConfig::merge_over`]
//!
//! Empty environment values count as unset.

use crate::error::SlackClientError;

use common::RedactedSecret;

use std::env;
use std::time::Duration;

use log::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = "https://slack.com/api/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_APP_CONFIGURATION_TOKEN: &str = "SLACK_APP_CONFIGURATION_TOKEN";
pub const ENV_REFRESH_TOKEN: &str = "SLACK_REFRESH_TOKEN";
pub const ENV_BASE_URL: &str = "SLACK_BASE_URL";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Short-lived app configuration token.
    pub access_token: Option<RedactedSecret>,
    /// Single-use token exchanged for a new access/refresh pair.
    pub refresh_token: Option<RedactedSecret>,
    /// `None` means [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
    /// Per-request deadline applied by the HTTP transport.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_access_token(mut self, token: impl Into<RedactedSecret>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_refresh_token(mut self, token: impl Into<RedactedSecret>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Load `.env` (if present) and read the `SLACK_*` variables.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {}", path.display()),
            Err(e) if e.not_found() => {
                debug!("No .env file found - will check existing environment variables");
            }
            Err(e) => warn!("Failed to parse .env: {e}"),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = |key: &str| lookup(key).and_then(RedactedSecret::non_empty);

        let config = Self {
            access_token: secret(ENV_APP_CONFIGURATION_TOKEN),
            refresh_token: secret(ENV_REFRESH_TOKEN),
            base_url: lookup(ENV_BASE_URL).filter(|url| !url.trim().is_empty()),
            timeout: DEFAULT_TIMEOUT,
        };

        debug!(
            "Environment config: access token {}, refresh token {}, base URL {}",
            presence(config.access_token.is_some()),
            presence(config.refresh_token.is_some()),
            config.base_url()
        );

        config
    }

    /// Overlay the values set on `self` onto `base`.
    ///
    /// The timeout always comes from `self`.
    pub fn merge_over(self, base: ClientConfig) -> ClientConfig {
        ClientConfig {
            access_token: self.access_token.or(base.access_token),
            refresh_token: self.refresh_token.or(base.refresh_token),
            base_url: self.base_url.or(base.base_url),
            timeout: self.timeout,
        }
    }

    /// # Errors
    /// Returns [`SlackClientError::Config`] for a non-HTTP base URL or a zero
    /// timeout, and [`SlackClientError::Credential`] when no token is set.
    #[track_caller]
    pub fn validate(&self) -> Result<(), SlackClientError> {
        if self.access_token.is_none() && self.refresh_token.is_none() {
            return Err(SlackClientError::credential(format!(
                "Either {ENV_APP_CONFIGURATION_TOKEN} or {ENV_REFRESH_TOKEN} must be provided"
            )));
        }

        let base_url = self.base_url();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SlackClientError::config(format!(
                "Invalid base URL format: {base_url}"
            )));
        }

        if self.timeout.is_zero() {
            return Err(SlackClientError::config("Timeout must be greater than zero"));
        }

        Ok(())
    }
}

fn presence(set: bool) -> &'static str {
    if set { "set" } else { "unset" }
}
