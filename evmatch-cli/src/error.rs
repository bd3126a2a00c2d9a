//! Error handling for the CLI application

use evmatch_api::{ApiError, ErrorKind};
use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid label data
    InputError(String),
    /// Configuration error
    ConfigError(String),
    /// Report could not be rendered
    OutputError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InputError(msg) => write!(f, "Input error: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputError(msg) => write!(f, "Output error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        let msg = match &err {
            ApiError::Input(msg) | ApiError::Configuration(msg) => msg.clone(),
            other => other.to_string(),
        };
        match err.kind() {
            ErrorKind::Input => CliError::InputError(msg),
            ErrorKind::Configuration => CliError::ConfigError(msg),
            ErrorKind::Serialization => CliError::OutputError(msg),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
