//! Logging for the `slackapp` command line.
//!
//! Logs go to stderr (colored) and optionally to a file, so stdout stays free
//! for command output.

use crate::error::CliError;

use std::io::stderr;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Level used when `--log-level` is not given.
#[cfg(debug_assertions)]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Initialize the global logger.
///
/// Safe to call more than once; later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns an error if:
/// - The log file cannot be created
/// - Another logger was already installed
pub fn initialize(level: LevelFilter, log_file: Option<&Path>) -> Result<(), CliError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(level, log_file);
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

fn initialize_internal(level: LevelFilter, log_file: Option<&Path>) -> Result<(), CliError> {
    build_dispatch(level, log_file)?
        .apply()
        .map_err(|e| CliError::cli(format!("Failed to initialize logger: {e}")))
}

/// Assemble the dispatch tree without installing it.
pub(crate) fn build_dispatch(
    level: LevelFilter,
    log_file: Option<&Path>,
) -> Result<Dispatch, CliError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    // Dependencies stay at warn so request internals don't drown our own logs
    let base_dispatch = Dispatch::new()
        .level(level.min(LevelFilter::Warn))
        .level_for("slackapp", level)
        .level_for("slackapp_client", level)
        .level_for("models", level);

    let stderr_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
            ))
        })
        .chain(stderr());

    let mut dispatch = base_dispatch.chain(stderr_dispatch);

    if let Some(path) = log_file {
        let file = fern::log_file(path)
            .map_err(|e| CliError::cli(format!("Failed to create log file: {e}")))?;

        // Plain text with source position
        let file_dispatch = Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0)
                ))
            })
            .chain(file);

        dispatch = dispatch.chain(file_dispatch);
    }

    Ok(dispatch)
}
