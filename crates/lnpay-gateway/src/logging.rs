//! File-backed tracing subscriber.

use std::fs;

use tracing::level_filters::LevelFilter;
use tracing::{warn, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Errors setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open log file: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("Failed to install log subscriber: {0}")]
    Subscriber(String),
}

/// Parse a level name, falling back to `info`.
pub fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

/// Open `{path}/{file}` for appending, creating the directory if needed.
pub fn open_log_file(config: &LogConfig) -> Result<RollingFileAppender, LogError> {
    fs::create_dir_all(&config.path)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&config.file)
        .build(&config.path)?;
    Ok(appender)
}

/// Install the global subscriber.
///
/// Writes to the configured log file, or to stderr if it cannot be opened.
/// `RUST_LOG` overrides the configured level. Keep the returned guard alive
/// for the life of the process so buffered lines are flushed. Fails if a
/// global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<WorkerGuard, LogError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(parse_level(&config.level)).into())
    });

    let (writer, guard, file_error) = match open_log_file(config) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (writer, guard, None)
        }
        Err(e) => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            (writer, guard, Some(e))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| LogError::Subscriber(e.to_string()))?;

    if let Some(e) = file_error {
        warn!(
            path = %config.path.display(),
            file = %config.file,
            "Failed to log to file, using stderr: {}",
            e
        );
    }

    Ok(guard)
}
