//! Log file setup
//!
//! The terminal belongs to the UI, so events are written to a file through a
//! non-blocking appender. The returned guard must live until the program exits
//! or buffered lines are lost.

use crate::config::{Config, LOG_FILE_NAME};
use crate::error::{Error, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber if logging is enabled.
///
/// Returns `Ok(None)` when `CTAG_LOG` is unset.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    let Some(directive) = config.log_filter.as_deref() else {
        return Ok(None);
    };

    std::fs::create_dir_all(&config.log_dir).map_err(|e| Error::io(&config.log_dir, e))?;

    let filter = EnvFilter::try_new(directive).map_err(|e| Error::Logging(e.to_string()))?;
    let appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Logging(e.to_string()))?;

    Ok(Some(guard))
}
