//! `tracing` subscriber setup.
//!
//! The TUI draws on the terminal, so it logs to a file; the plain CLI
//! commands log to stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(filter: &str, target: LogTarget<'_>) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_new(filter)
        .map_err(|e| AppError::usage(format!("Invalid log filter '{filter}': {e}")))?;

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter).with_target(false);

    // `try_init` only fails when a subscriber is already set.
    match target {
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| AppError::io(&format!("Failed to open log file {}", path.display()), e))?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}
