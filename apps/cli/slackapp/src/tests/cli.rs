// Unit tests for argument parsing

use crate::cli::{Cli, Command};

use clap::Parser;
use log::LevelFilter;

/// **VALUE**: Verifies global flags are accepted after the subcommand.
///
/// **WHY THIS MATTERS**: `slackapp export A1 --base-url ...` is the natural way to type it.
///
/// **BUG THIS CATCHES**: Would catch `global = true` being dropped from a flag.
#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    // WHEN
    let cli = Cli::try_parse_from([
        "slackapp",
        "export",
        "A0123",
        "-o",
        "manifest.json",
        "--base-url",
        "http://localhost:9000/api/",
        "--log-level",
        "trace",
    ])
    .unwrap();

    // THEN
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000/api/"));
    assert_eq!(cli.log_level, Some(LevelFilter::Trace));
    let Command::Export { app_id, output } = cli.command else {
        panic!("expected export");
    };
    assert_eq!(app_id, "A0123");
    assert_eq!(output.unwrap().to_str(), Some("manifest.json"));
}

/// **VALUE**: Verifies a refresh token passed on the command line stays redacted.
///
/// **WHY THIS MATTERS**: The parsed command is logged at debug level.
///
/// **BUG THIS CATCHES**: Would catch the flag being stored as a plain `String`.
#[test]
fn given_refresh_token_flag_when_debug_printed_then_redacted() {
    // WHEN
    let cli =
        Cli::try_parse_from(["slackapp", "rotate", "--refresh-token", "xoxe-1-secret"]).unwrap();

    // THEN
    let printed = format!("{:?}", cli.command);
    assert!(!printed.contains("xoxe-1-secret"));
    let Command::Rotate { refresh_token } = cli.command else {
        panic!("expected rotate");
    };
    assert_eq!(refresh_token.unwrap().expose(), "xoxe-1-secret");
}

/// **VALUE**: Verifies update requires both the app ID and the manifest path.
///
/// **WHY THIS MATTERS**: Swapping or omitting them would update the wrong app.
///
/// **BUG THIS CATCHES**: Would catch the manifest argument becoming optional.
#[test]
fn given_update_without_manifest_when_parsed_then_rejected() {
    // WHEN
    let result = Cli::try_parse_from(["slackapp", "update", "A0123"]);

    // THEN
    assert!(result.is_err());
}

/// **VALUE**: Verifies an unknown log level is rejected at parse time.
///
/// **WHY THIS MATTERS**: Silently falling back would hide the user's typo.
///
/// **BUG THIS CATCHES**: Would catch the level being parsed leniently.
#[test]
fn given_unknown_log_level_when_parsed_then_rejected() {
    // WHEN
    let result = Cli::try_parse_from(["slackapp", "--log-level", "loud", "delete", "A1"]);

    // THEN
    assert!(result.is_err());
}
