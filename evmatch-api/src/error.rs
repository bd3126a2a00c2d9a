//! API error types

use evmatch_core::CoreError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid label sequences (length mismatch, empty, unparsable)
    #[error("input error: {0}")]
    Input(String),

    /// Invalid matching configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// I/O error while reading an input source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a report failed
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Broad error category reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Problem with the supplied label data
    Input,
    /// Problem with thresholds, types, names, or threads
    Configuration,
    /// Report could not be serialized
    Serialization,
}

impl ApiError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Input(_) | ApiError::Io(_) => ErrorKind::Input,
            ApiError::Configuration(_) => ErrorKind::Configuration,
            #[cfg(feature = "serde")]
            ApiError::Serde(_) => ErrorKind::Serialization,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptySequence | CoreError::LengthMismatch { .. } => {
                ApiError::Input(err.to_string())
            }
            CoreError::InvalidThreshold(_) | CoreError::ThreadPool(_) => {
                ApiError::Configuration(err.to_string())
            }
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
