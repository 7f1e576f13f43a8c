//! Tracing subscriber setup.
//!
//! Development mode logs human-readable output at `debug`; production logs
//! JSON lines at `info`. `RUST_LOG` overrides either default. When a log
//! directory is configured, a plain-text copy is also written to a
//! daily-rolling file (`mindcheck.log.YYYY-MM-DD`).

use anyhow::{Context, Result};
use mindcheck_core::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// File name prefix of the rolling log files.
pub const LOG_FILE_PREFIX: &str = "mindcheck.log";

/// Returns the filter directive used when `RUST_LOG` is not set.
pub fn default_directive(config: &AppConfig) -> &'static str {
    if config.is_development() {
        "debug,hyper=info"
    } else {
        "info"
    }
}

/// Installs the global tracing subscriber.
///
/// The returned guard must be held for the life of the process when file
/// logging is enabled; dropping it flushes and stops the writer thread.
pub fn init_logging(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if config.is_development() {
        registry
            .with(fmt::layer().pretty())
            .try_init()
            .context("Failed to install tracing subscriber")?;
    } else {
        registry
            .with(fmt::layer().json())
            .try_init()
            .context("Failed to install tracing subscriber")?;
    }

    Ok(guard)
}
