//! Process-level error type.
//!
//! Domain outcomes (bad id, unknown animal, inapplicable action) are *not*
//! errors; they are ordinary results rendered as messages. `AppError` is only
//! for failures that end the process: terminal setup, IO, bad configuration.

/// Exit code for usage and configuration problems.
pub const EXIT_USAGE: u8 = 2;
/// Exit code for terminal and IO failures.
pub const EXIT_IO: u8 = 4;

#[derive(Clone, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, message)
    }

    pub fn io(context: &str, err: impl std::fmt::Display) -> Self {
        Self::new(EXIT_IO, format!("{context}: {err}"))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_carries_context_and_code() {
        let err = AppError::io("Failed to enable raw mode", "not a tty");
        assert_eq!(err.exit_code(), EXIT_IO);
        assert_eq!(err.to_string(), "Failed to enable raw mode: not a tty");
    }
}
