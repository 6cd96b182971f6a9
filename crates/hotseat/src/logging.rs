//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, Copy)]
pub enum LogSink<'a> {
    /// Append to a file; the terminal UI owns stdout.
    File(&'a Path),
    /// Standard error, for headless commands.
    Stderr,
}

/// Builds the filter: `RUST_LOG` if set, otherwise `fallback`.
pub fn env_filter(fallback: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback)
            .with_context(|| format!("Invalid log filter {:?}", fallback)),
    }
}

/// Installs the global subscriber.
pub fn init_tracing(fallback_filter: &str, sink: LogSink<'_>) -> Result<()> {
    let filter = env_filter(fallback_filter)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match sink {
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        LogSink::Stderr => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}
