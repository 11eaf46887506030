//! Error types for the check runner
//!
//! Failures inside a step are carried as [`RunnerError`] until the step
//! boundary, where they are logged and folded into the step outcome.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the check runner
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The executable could not be found on PATH
    #[error("Command not found: {command}")]
    CommandNotFound { command: String },

    /// Process execution errors
    #[error("Process error: {command} failed")]
    Process {
        command: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The requested test file does not exist under the test directory
    #[error("Test file not found: {}", .path.display())]
    TestFileNotFound { path: PathBuf },

    /// The requested test file name points outside the test directory
    #[error("Invalid test file name: {name}")]
    InvalidTestFile { name: String },

    /// The test directory is required for whole-suite runs
    #[error("Test directory not found: {}", .path.display())]
    TestsDirMissing { path: PathBuf },

    /// File system operation errors
    #[error("File system error: {operation} failed on {}", .path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl RunnerError {
    /// Create a new command-not-found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a new process error
    pub fn process(command: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the error means the tool itself is not installed
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::CommandNotFound { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RunnerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(RunnerError::command_not_found("black").is_not_found());
        assert!(!RunnerError::process("black --check .", Some(1)).is_not_found());
    }

    #[test]
    fn test_error_messages() {
        let err = RunnerError::TestFileNotFound {
            path: PathBuf::from("tests/test_missing.py"),
        };
        assert_eq!(err.to_string(), "Test file not found: tests/test_missing.py");

        let err = RunnerError::command_not_found("python3");
        assert_eq!(err.to_string(), "Command not found: python3");
    }
}
