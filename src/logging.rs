use anyhow::{anyhow, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Log file name inside the log directory
pub const LOG_FILE: &str = "fasttodo.log";

fn env_filter(default_filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))
}

/// Log to stderr (one-shot subcommands)
pub fn init_stderr(default_filter: &str) -> Result<()> {
    let _ = tracing_subscriber::registry()
        .with(env_filter(default_filter)?)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init();
    Ok(())
}

/// Log to a file (the TUI owns the terminal).
///
/// The returned guard flushes the writer on drop and must outlive the app.
pub fn init_file(default_filter: &str, dir: &Path) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::registry()
        .with(env_filter(default_filter)?)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init();
    Ok(guard)
}
