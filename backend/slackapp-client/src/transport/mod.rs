//! HTTP plumbing for the Slack Web API.
//!
//! Every method is a `POST` to `<base_url><method>`. The transport knows how
//! to encode a body and read a response back as bytes; decoding the envelope
//! is left to [`crate::response`].

use crate::error::SlackClientError;

use common::RedactedSecret;

use std::time::Duration;

use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use url::Url;

pub const USER_AGENT: &str =
    const_format::concatcp!("slackapp-client/", env!("CARGO_PKG_VERSION"));

/// Raw response: status plus the body read once into memory.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
pub struct SlackTransport {
    base_url: Url,
    client: Client,
}

impl SlackTransport {
    /// # Errors
    /// Returns [`SlackClientError::Config`] for an unparsable base URL or when
    /// the HTTP client cannot be built.
    #[track_caller]
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SlackClientError> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SlackClientError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[track_caller]
    pub fn method_url(&self, method: &str) -> Result<Url, SlackClientError> {
        Ok(self.base_url.join(method)?)
    }

    /// `POST` a JSON body with a bearer token.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        method: &str,
        access_token: &RedactedSecret,
        body: &B,
    ) -> Result<RawResponse, SlackClientError> {
        let url = self.method_url(method)?;
        let request = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", access_token.expose()))
            .json(body);

        self.execute(method, request).await
    }

    /// `POST` a form-encoded body without credentials.
    pub async fn post_form<B: Serialize + ?Sized>(
        &self,
        method: &str,
        form: &B,
    ) -> Result<RawResponse, SlackClientError> {
        let url = self.method_url(method)?;
        let request = self.client.post(url).form(form);

        self.execute(method, request).await
    }

    async fn execute(
        &self,
        method: &str,
        request: RequestBuilder,
    ) -> Result<RawResponse, SlackClientError> {
        debug!("Calling Slack API method {method}");

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!("Slack API method {method} answered HTTP {status} ({} bytes)", body.len());

        Ok(RawResponse { status, body })
    }
}

/// Ensure a trailing `/` so `join("apps.manifest.create")` appends rather
/// than replacing the last path segment.
#[track_caller]
pub(crate) fn normalize_base_url(base_url: &str) -> Result<Url, SlackClientError> {
    let mut url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(SlackClientError::config(format!(
            "Base URL '{base_url}' cannot be used as a base"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
