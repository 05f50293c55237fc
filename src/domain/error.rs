use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for argprof operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// The notebook executor could not be started at all.
    #[error("Failed to start '{program}': {details}")]
    ExecutorUnavailable { program: String, details: String },

    /// Unexpected internal failure (e.g. output serialization).
    #[error("Internal error: {0}")]
    InternalError(String),

    /// A notebook ran and exited unsuccessfully.
    #[error("Notebook '{notebook}' failed ({})", describe_code(.code))]
    NotebookFailed { notebook: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit code to report for this error.
    ///
    /// A failed notebook propagates the executor's own non-zero code; every
    /// other failure (including signal termination) maps to `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::NotebookFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}
