//! Subcommand handlers.
//!
//! Handlers write their result to the given writer and log progress; the
//! binary passes stdout.

use crate::cli::Command;
use crate::error::CliError;

use common::ErrorLocation;
use models::App;
use slackapp_client::{ClientConfig, SlackClient};

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{info, warn};
use serde_json::json;

pub async fn run<W: Write>(
    command: Command,
    config: ClientConfig,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        Command::Lint { manifest } => {
            let app = load_manifest(&manifest)?;
            let warnings = app.lint();
            for warning in &warnings {
                writeln!(out, "warning: {warning}")?;
            }
            writeln!(
                out,
                "{}: {} warning(s)",
                manifest.display(),
                warnings.len()
            )?;
        }
        Command::Create { manifest } => {
            let app = load_manifest(&manifest)?;
            log_lint_warnings(&app);
            let client = SlackClient::new(config)?;
            let response = client.create_manifest_from_app(&app).await?;

            let output = json!({
                "app_id": response.app_id,
                "client_id": response.credentials.as_ref().map(|c| c.client_id.as_str()),
                "oauth_authorize_url": response.oauth_authorize_url,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        Command::Update { app_id, manifest } => {
            let app = load_manifest(&manifest)?;
            log_lint_warnings(&app);
            let client = SlackClient::new(config)?;
            let response = client.update_manifest_from_app(&app_id, &app).await?;

            if response.permissions_updated {
                warn!("Scopes changed; the app must be reinstalled to pick them up");
            }
            let output = json!({
                "app_id": response.app_id,
                "permissions_updated": response.permissions_updated,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        Command::Export { app_id, output } => {
            let client = SlackClient::new(config)?;
            let app = client.export_manifest(&app_id).await?;
            let rendered = serde_json::to_string_pretty(&app)?;

            match output {
                Some(path) => {
                    fs::write(&path, format!("{rendered}\n"))?;
                    info!("Wrote manifest for {app_id} to {}", path.display());
                }
                None => writeln!(out, "{rendered}")?,
            }
        }
        Command::Delete { app_id } => {
            let client = SlackClient::new(config)?;
            client.delete_manifest(&app_id).await?;
            writeln!(out, "Deleted {app_id}")?;
        }
        Command::Rotate { refresh_token } => {
            let refresh_token = refresh_token
                .filter(|token| !token.expose().trim().is_empty())
                .or_else(|| config.refresh_token.clone())
                .ok_or_else(|| CliError::cli("No refresh token given or in environment"))?;
            // The facade requires some token to build; the one being rotated will do
            let config = ClientConfig {
                refresh_token: Some(refresh_token.clone()),
                ..config
            };
            let client = SlackClient::new(config)?;
            let response = client.rotate_token(&refresh_token).await?;

            let output = json!({
                "token": response.token.expose(),
                "refresh_token": response.refresh_token.expose(),
                "issued_at": response.issued_at.as_secs(),
                "expires_at": response.expires_at.as_secs(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    Ok(())
}

/// Read, parse and validate a manifest file.
pub fn load_manifest(path: &Path) -> Result<App, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::Io {
        message: format!("Failed to read {}: {e}", path.display()),
        location: ErrorLocation::here(),
    })?;
    let app = App::from_json_str(&text)?;
    app.validate()?;

    Ok(app)
}

fn log_lint_warnings(app: &App) {
    for warning in app.lint() {
        warn!("{warning}");
    }
}
