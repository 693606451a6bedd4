//! Access-token lifecycle with single-flight refresh-token rotation.
//!
//! Slack refresh tokens are single use: every `tooling.tokens.rotate` call
//! invalidates the token it was given. The coordinator therefore holds one
//! async mutex across the whole "check token, else rotate" sequence, so
//! concurrent callers queue behind the first rotation and then reuse its
//! result instead of rotating with an already-consumed token.
//!
//! # Cancellation
//!
//! State is only written after the rotate future has resolved. Dropping a
//! caller's future mid-rotation releases the lock and leaves both tokens as
//! they were.

use crate::error::SlackClientError;

use common::{RedactedSecret, UnixTimestamp};

use std::future::Future;
use std::time::{Duration, SystemTime};

use log::{debug, info, warn};
use tokio::sync::Mutex;

/// Tokens younger than this margin before `exp` are treated as expired.
pub const EXPIRY_SKEW: Duration = Duration::from_secs(60);

/// Result of one successful rotation.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: RedactedSecret,
    pub refresh_token: RedactedSecret,
    pub expires_at: Option<UnixTimestamp>,
}

/// Exchanges a refresh token for a fresh token pair.
///
/// Implemented by the HTTP transport; tests substitute counting fakes.
pub trait TokenRotator: Send + Sync {
    fn rotate(
        &self,
        refresh_token: &RedactedSecret,
    ) -> impl Future<Output = Result<TokenPair, SlackClientError>> + Send;
}

#[derive(Debug)]
struct CredentialState {
    access_token: Option<RedactedSecret>,
    refresh_token: Option<RedactedSecret>,
    expires_at: Option<UnixTimestamp>,
}

impl CredentialState {
    fn usable_access_token(&self, now: SystemTime) -> Option<&RedactedSecret> {
        let token = self.access_token.as_ref()?;
        match self.expires_at {
            Some(expires_at) if expires_at.has_passed(now, EXPIRY_SKEW) => None,
            _ => Some(token),
        }
    }
}

/// Redacted view of the credential state, safe to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialSnapshot {
    pub has_access_token: bool,
    pub has_refresh_token: bool,
    pub expires_at: Option<UnixTimestamp>,
}

/// Owns the mutable token pair for one client.
#[derive(Debug)]
pub struct CredentialCoordinator {
    state: Mutex<CredentialState>,
}

impl CredentialCoordinator {
    /// # Errors
    /// Returns [`SlackClientError::Credential`] when neither token is given.
    #[track_caller]
    pub fn new(
        access_token: Option<RedactedSecret>,
        refresh_token: Option<RedactedSecret>,
    ) -> Result<Self, SlackClientError> {
        if access_token.is_none() && refresh_token.is_none() {
            return Err(SlackClientError::credential(
                "Either an app configuration token or a refresh token must be provided",
            ));
        }

        Ok(Self {
            state: Mutex::new(CredentialState {
                access_token,
                refresh_token,
                expires_at: None,
            }),
        })
    }

    /// Return a usable access token, rotating the refresh token first if needed.
    ///
    /// At most one rotation runs at a time. Callers that arrive while one is in
    /// flight wait for it and then find the new token already in place.
    ///
    /// # Errors
    /// - [`SlackClientError::Credential`] when no usable access token exists
    ///   and no refresh token is available
    /// - [`SlackClientError::Credential`] wrapping the underlying failure when
    ///   the rotation call fails; state is left unchanged
    pub async fn ensure_access_token<R: TokenRotator>(
        &self,
        rotator: &R,
    ) -> Result<RedactedSecret, SlackClientError> {
        let mut state = self.state.lock().await;

        if let Some(token) = state.usable_access_token(SystemTime::now()) {
            debug!("App configuration token is available, continuing");
            return Ok(token.clone());
        }

        let Some(refresh_token) = state.refresh_token.clone() else {
            return Err(SlackClientError::credential(
                "No usable app configuration token and no refresh token to rotate",
            ));
        };

        info!(
            "No usable app configuration token, rotating refresh token ({} chars)",
            refresh_token.len()
        );

        let pair = match rotator.rotate(&refresh_token).await {
            Ok(pair) => pair,
            Err(e) => {
                warn!("Refresh token rotation failed ({})", e.error_category());
                return Err(SlackClientError::rotation_failed(e));
            }
        };

        let access_token = pair.access_token.clone();
        state.access_token = Some(pair.access_token);
        state.refresh_token = Some(pair.refresh_token);
        state.expires_at = pair.expires_at;

        match pair.expires_at {
            Some(expires_at) => info!("Rotated app configuration token, expires at {expires_at}"),
            None => info!("Rotated app configuration token"),
        }

        Ok(access_token)
    }

    /// Forget `stale` if it is still the current access token.
    ///
    /// Compare-and-clear: when several callers report the same rejected token,
    /// only the first clears it, and a token installed by a newer rotation is
    /// never discarded. Returns whether the token was cleared.
    pub async fn invalidate_access_token(&self, stale: &RedactedSecret) -> bool {
        let mut state = self.state.lock().await;
        if state.access_token.as_ref() == Some(stale) {
            debug!("Invalidating rejected app configuration token");
            state.access_token = None;
            state.expires_at = None;
            true
        } else {
            false
        }
    }

    pub async fn snapshot(&self) -> CredentialSnapshot {
        let state = self.state.lock().await;
        CredentialSnapshot {
            has_access_token: state.access_token.is_some(),
            has_refresh_token: state.refresh_token.is_some(),
            expires_at: state.expires_at,
        }
    }

    /// Current refresh token, for callers that persist it between runs.
    ///
    /// # Security Note
    /// The returned value is single use once handed to Slack.
    pub async fn refresh_token(&self) -> Option<RedactedSecret> {
        self.state.lock().await.refresh_token.clone()
    }
}
