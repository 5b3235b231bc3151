//! Tracing subscriber setup.
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

/// Name of the log file created inside `ARENA_LOG_DIR`.
pub const LOG_FILE_NAME: &str = "arena.log";

/// Installs the global subscriber.
///
/// Stderr only shows warnings unless `RUST_LOG` says otherwise, so battle
/// output on stdout stays readable. When a log directory is configured, a
/// second layer writes everything down to `debug` into [`LOG_FILE_NAME`].
///
/// The returned guard flushes the file writer on drop and must be kept
/// alive for the whole run.
pub fn setup_logging(config: &CliConfig) -> Result<Option<WorkerGuard>> {
    let stderr_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.color)
        .with_filter(stderr_filter);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let (writer, guard) = open_log_file(dir)?;
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(dir) = &config.log_dir {
        tracing::info!("Log file: {}/{}", dir.display(), LOG_FILE_NAME);
    }

    Ok(guard)
}

/// Creates `dir` if needed and opens a non-blocking writer to the log file.
pub fn open_log_file(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(file_appender))
}
