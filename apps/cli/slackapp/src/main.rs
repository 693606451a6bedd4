use slackapp::cli::Cli;
use slackapp::commands;
use slackapp::error::CliError;
use slackapp::logger::{DEFAULT_LOG_LEVEL, initialize as LoggerInitialize};

use slackapp_client::ClientConfig;

use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.unwrap_or(DEFAULT_LOG_LEVEL);
    if let Err(e) = LoggerInitialize(level, cli.log_file.as_deref()) {
        eprintln!("{e}");
        return ExitCode::from(2);
    }

    let explicit = ClientConfig {
        base_url: cli.base_url.clone(),
        ..ClientConfig::default()
    };
    let config = explicit.merge_over(ClientConfig::from_env());
    debug!("Running {:?}", cli.command);

    match commands::run(cli.command, config, &mut stdout().lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn report(error: &CliError) {
    match error {
        CliError::Client { source } => {
            for diagnostic in source.diagnostics() {
                error!("{diagnostic}");
            }
            debug!("{source}");
        }
        other => error!("{other}"),
    }
}
