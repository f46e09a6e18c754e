//! Process-wide logging for the status-meaning server.
//!
//! Colored stdout always, plus a plain-text file when a directory is
//! configured. Initialization is thread-safe and runs at most once.

use crate::error::ServerError;

use models::ErrorLocation;

use std::fs::create_dir_all;
use std::io::stdout;
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

const LOG_FILE_NAME: &str = "status-meaning.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Level used when the config does not name one.
#[cfg(debug_assertions)]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Install the global logger.
///
/// Safe to call more than once: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created, or if
/// another global logger is already installed.
pub fn initialize(level: LevelFilter, log_dir: Option<&Path>) -> Result<(), ServerError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = dispatch(level, log_dir).and_then(|dispatch| {
            dispatch.apply().map_err(|e| ServerError::Logger {
                message: format!("Failed to initialize logger: {e}"),
                location: ErrorLocation::caller(),
            })
        });

        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
            if let Some(dir) = log_dir {
                info!("Log directory: {}", dir.display());
            }
        }
    });

    result
}

/// Build the stdout (+ optional file) dispatch without installing it.
#[track_caller]
pub(crate) fn dispatch(
    level: LevelFilter,
    log_dir: Option<&Path>,
) -> Result<Dispatch, ServerError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stdout());

    let mut base_dispatch = Dispatch::new().level(level).chain(stdout_dispatch);

    if let Some(dir) = log_dir {
        create_dir_all(dir).map_err(|e| ServerError::Logger {
            message: format!("Failed to create log directory {}: {e}", dir.display()),
            location: ErrorLocation::caller(),
        })?;

        let log_file = fern::log_file(dir.join(LOG_FILE_NAME)).map_err(|e| ServerError::Logger {
            message: format!("Failed to create log file: {e}"),
            location: ErrorLocation::caller(),
        })?;

        // Plain text, no colors
        let file_dispatch = Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0)
                ))
            })
            .chain(log_file);

        base_dispatch = base_dispatch.chain(file_dispatch);
    }

    Ok(base_dispatch)
}
