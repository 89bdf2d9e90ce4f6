//! Tracing subscriber setup.
//!
//! The filter comes from `PUNTO_LOG` (default `punto=info`). The browser owns
//! the terminal, so it logs to `${PUNTO_HOME}/logs/punto.log`; every other
//! command logs to stderr.

use anyhow::{Context, Result};
use punto_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_ENV: &str = "PUNTO_LOG";
const DEFAULT_DIRECTIVES: &str = "punto=info,punto_core=info,punto_tui=info";
const LOG_FILE: &str = "punto.log";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Logs to stderr without ANSI colors when stderr is redirected.
pub fn init_stderr() {
    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Logs to a file under the Punto Medio home. Keep the guard alive until
/// exit so buffered lines are flushed.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init_file() -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init();
    Ok(guard)
}
