//! Runtime settings read from the environment (and `.env`, if present).

use std::path::PathBuf;

use crate::error::AppError;

pub const ENV_SEED: &str = "HERD_SEED";
pub const ENV_LOG: &str = "HERD_LOG";
pub const ENV_LOG_FILE: &str = "HERD_LOG_FILE";

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_LOG_FILE: &str = "herd.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Fixed seed for the random source; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// `EnvFilter` directive string.
    pub log_filter: String,
    /// Log destination for the TUI, which owns the terminal.
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut settings = Self::default();

        if let Some(raw) = lookup(ENV_SEED).filter(|s| !s.trim().is_empty()) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| AppError::usage(format!("Invalid {ENV_SEED} '{raw}': {e}")))?;
            settings.seed = Some(seed);
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|s| !s.trim().is_empty()) {
            settings.log_filter = filter;
        }
        if let Some(path) = lookup(ENV_LOG_FILE).filter(|s| !s.trim().is_empty()) {
            settings.log_file = PathBuf::from(path);
        }

        Ok(settings)
    }
}
