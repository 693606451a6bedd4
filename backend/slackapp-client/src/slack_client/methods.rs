//! Request and response bodies for the five supported Web API methods.

use crate::credentials::TokenPair;
use crate::response::SlackResponse;

use common::{RedactedSecret, UnixTimestamp};
use models::App;

use serde::{Deserialize, Serialize};

pub const APPS_MANIFEST_CREATE: &str = "apps.manifest.create";
pub const APPS_MANIFEST_UPDATE: &str = "apps.manifest.update";
pub const APPS_MANIFEST_EXPORT: &str = "apps.manifest.export";
pub const APPS_MANIFEST_DELETE: &str = "apps.manifest.delete";
pub const TOOLING_TOKENS_ROTATE: &str = "tooling.tokens.rotate";

#[derive(Debug, Serialize)]
pub(crate) struct CreateManifestRequest<'a> {
    pub manifest: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateManifestRequest<'a> {
    pub app_id: &'a str,
    pub manifest: &'a str,
}

/// Body shared by export and delete.
#[derive(Debug, Serialize)]
pub(crate) struct AppIdRequest<'a> {
    pub app_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RotateTokenForm<'a> {
    pub refresh_token: &'a str,
}

/// Secrets issued for a newly created app.
#[derive(Debug, Clone, Deserialize)]
pub struct AppCredentials {
    pub client_id: String,
    pub client_secret: RedactedSecret,
    pub verification_token: RedactedSecret,
    pub signing_secret: RedactedSecret,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateManifestResponse {
    pub ok: bool,
    pub app_id: String,
    #[serde(default)]
    pub credentials: Option<AppCredentials>,
    #[serde(default)]
    pub oauth_authorize_url: Option<String>,
}

impl SlackResponse for CreateManifestResponse {
    fn is_ok(&self) -> bool {
        self.ok
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateManifestResponse {
    pub ok: bool,
    pub app_id: String,
    #[serde(default)]
    pub permissions_updated: bool,
}

impl SlackResponse for UpdateManifestResponse {
    fn is_ok(&self) -> bool {
        self.ok
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportManifestResponse {
    pub ok: bool,
    pub manifest: App,
}

impl SlackResponse for ExportManifestResponse {
    fn is_ok(&self) -> bool {
        self.ok
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteManifestResponse {
    pub ok: bool,
}

impl SlackResponse for DeleteManifestResponse {
    fn is_ok(&self) -> bool {
        self.ok
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RotateTokenResponse {
    pub ok: bool,
    pub token: RedactedSecret,
    pub refresh_token: RedactedSecret,
    #[serde(rename = "iat")]
    pub issued_at: UnixTimestamp,
    #[serde(rename = "exp")]
    pub expires_at: UnixTimestamp,
}

impl SlackResponse for RotateTokenResponse {
    fn is_ok(&self) -> bool {
        self.ok
    }
}

impl From<RotateTokenResponse> for TokenPair {
    fn from(response: RotateTokenResponse) -> Self {
        TokenPair {
            access_token: response.token,
            refresh_token: response.refresh_token,
            expires_at: Some(response.expires_at),
        }
    }
}
