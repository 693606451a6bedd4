//! The API operations facade.
//!
//! Each manifest operation follows the same path: ask the coordinator for an
//! access token, `POST` the JSON body, decode the envelope. Token rotation is
//! form-encoded and unauthenticated. No operation retries; retry policy
//! belongs to the caller, who can consult [`SlackClientError::is_retryable`].

pub mod methods;

pub use methods::{
    AppCredentials, CreateManifestResponse, DeleteManifestResponse, ExportManifestResponse,
    RotateTokenResponse, UpdateManifestResponse,
};

use crate::config::ClientConfig;
use crate::credentials::{CredentialCoordinator, TokenPair, TokenRotator};
use crate::error::SlackClientError;
use crate::response::{SlackResponse, decode_response};
use crate::transport::{RawResponse, SlackTransport};

use common::RedactedSecret;
use models::App;

use methods::{
    APPS_MANIFEST_CREATE, APPS_MANIFEST_DELETE, APPS_MANIFEST_EXPORT, APPS_MANIFEST_UPDATE,
    AppIdRequest, CreateManifestRequest, RotateTokenForm, TOOLING_TOKENS_ROTATE,
    UpdateManifestRequest,
};

use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

/// Slack's code for an app configuration token past its 12 hour lifetime.
const TOKEN_EXPIRED_ERROR: &str = "token_expired";

/// Client for the app manifest API.
///
/// Cheap to clone; all clones share one credential state, so one rotation
/// serves every task holding a clone.
#[derive(Debug, Clone)]
pub struct SlackClient {
    transport: SlackTransport,
    credentials: Arc<CredentialCoordinator>,
}

impl SlackClient {
    /// Build a client. Makes no network call.
    ///
    /// # Errors
    /// - [`SlackClientError::Credential`] when the config holds no token at all
    /// - [`SlackClientError::Config`] for an invalid base URL
    #[track_caller]
    pub fn new(config: ClientConfig) -> Result<Self, SlackClientError> {
        config.validate()?;
        let transport = SlackTransport::new(config.base_url(), config.timeout)?;
        let credentials = CredentialCoordinator::new(config.access_token, config.refresh_token)?;

        debug!("Slack client configured for {}", transport.base_url());

        Ok(Self {
            transport,
            credentials: Arc::new(credentials),
        })
    }

    pub fn credentials(&self) -> &CredentialCoordinator {
        &self.credentials
    }

    /// `apps.manifest.create` with manifest JSON text.
    pub async fn create_manifest(
        &self,
        manifest: &str,
    ) -> Result<CreateManifestResponse, SlackClientError> {
        let response: CreateManifestResponse = self
            .call(APPS_MANIFEST_CREATE, &CreateManifestRequest { manifest })
            .await?;

        info!("Created Slack app {}", response.app_id);
        Ok(response)
    }

    /// `apps.manifest.create` from a typed manifest.
    pub async fn create_manifest_from_app(
        &self,
        app: &App,
    ) -> Result<CreateManifestResponse, SlackClientError> {
        let manifest = app.to_json_string()?;
        self.create_manifest(&manifest).await
    }

    pub async fn update_manifest(
        &self,
        app_id: &str,
        manifest: &str,
    ) -> Result<UpdateManifestResponse, SlackClientError> {
        let response: UpdateManifestResponse = self
            .call(APPS_MANIFEST_UPDATE, &UpdateManifestRequest { app_id, manifest })
            .await?;

        info!(
            "Updated Slack app {} (permissions updated: {})",
            response.app_id, response.permissions_updated
        );
        Ok(response)
    }

    pub async fn update_manifest_from_app(
        &self,
        app_id: &str,
        app: &App,
    ) -> Result<UpdateManifestResponse, SlackClientError> {
        let manifest = app.to_json_string()?;
        self.update_manifest(app_id, &manifest).await
    }

    pub async fn export_manifest(&self, app_id: &str) -> Result<App, SlackClientError> {
        let response: ExportManifestResponse = self
            .call(APPS_MANIFEST_EXPORT, &AppIdRequest { app_id })
            .await?;

        Ok(response.manifest)
    }

    pub async fn delete_manifest(&self, app_id: &str) -> Result<(), SlackClientError> {
        let _: DeleteManifestResponse = self
            .call(APPS_MANIFEST_DELETE, &AppIdRequest { app_id })
            .await?;

        info!("Deleted Slack app {app_id}");
        Ok(())
    }

    /// `tooling.tokens.rotate`. Does not touch this client's own credentials;
    /// the coordinator rotates those by itself when it needs to.
    pub async fn rotate_token(
        &self,
        refresh_token: &RedactedSecret,
    ) -> Result<RotateTokenResponse, SlackClientError> {
        rotate_with(&self.transport, refresh_token).await
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, SlackClientError>
    where
        B: Serialize + ?Sized,
        T: SlackResponse,
    {
        let access_token = self.credentials.ensure_access_token(&self.transport).await?;
        let raw = self.transport.post_json(method, &access_token, body).await?;
        let result = read_response::<T>(raw);

        if let Err(e) = &result {
            if e.api_error_code() == Some(TOKEN_EXPIRED_ERROR) {
                self.credentials.invalidate_access_token(&access_token).await;
            }
        }

        result
    }
}

impl TokenRotator for SlackTransport {
    async fn rotate(&self, refresh_token: &RedactedSecret) -> Result<TokenPair, SlackClientError> {
        rotate_with(self, refresh_token).await.map(TokenPair::from)
    }
}

async fn rotate_with(
    transport: &SlackTransport,
    refresh_token: &RedactedSecret,
) -> Result<RotateTokenResponse, SlackClientError> {
    let form = RotateTokenForm {
        refresh_token: refresh_token.expose(),
    };
    let raw = transport.post_form(TOOLING_TOKENS_ROTATE, &form).await?;
    read_response(raw)
}

/// Decode a response, preferring Slack's own error envelope over the HTTP status.
#[track_caller]
fn read_response<T: SlackResponse>(raw: RawResponse) -> Result<T, SlackClientError> {
    if raw.is_success() {
        return decode_response(&raw.body);
    }

    match decode_response::<T>(&raw.body) {
        Ok(response) => Ok(response),
        Err(e @ SlackClientError::Api { .. }) => Err(e),
        Err(_) => Err(SlackClientError::http_status(
            raw.status,
            String::from_utf8_lossy(&raw.body),
        )),
    }
}
