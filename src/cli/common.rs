//! Error and exit code types shared by all commands.

use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: arguments, config or keymap content
    ValidationError = 1,
    /// Reading or writing a file failed
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to the OS.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed
    #[error("{0}")]
    Io(String),
    /// The input was rejected
    #[error("{0}")]
    Validation(String),
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Exit code the process should terminate with.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::IoError,
            Self::Validation(_) => ExitCode::ValidationError,
        }
    }
}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;
