//! Command line surface.

use common::RedactedSecret;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "slackapp", version, about = "Manage Slack apps through their manifests")]
pub struct Cli {
    /// Override the Slack Web API base URL (also read from SLACK_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// off, error, warn, info, debug or trace
    #[arg(long, global = true)]
    pub log_level: Option<LevelFilter>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new app from a manifest file
    Create {
        /// Path to the manifest JSON
        manifest: PathBuf,
    },

    /// Replace an existing app's manifest
    Update {
        app_id: String,
        /// Path to the manifest JSON
        manifest: PathBuf,
    },

    /// Print an app's current manifest
    Export {
        app_id: String,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Delete an app
    Delete { app_id: String },

    /// Check a manifest file locally without calling Slack
    Lint {
        /// Path to the manifest JSON
        manifest: PathBuf,
    },

    /// Exchange a refresh token for a new token pair and print it
    Rotate {
        /// Defaults to SLACK_REFRESH_TOKEN
        #[arg(long)]
        refresh_token: Option<RedactedSecret>,
    },
}
