//! Error types for textchunk.

use thiserror::Error;

/// Result type alias using ChunkError.
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Errors that can occur while configuring or driving the chunker.
///
/// Chunking a document never fails once a [`crate::ChunkerConfig`] exists;
/// every variant here comes from configuration or from the surrounding I/O.
#[derive(Error, Debug)]
pub enum ChunkError {
    /// Chunk size or overlap rejected before any processing.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Configuration file could not be parsed.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error (a batch worker panicked or was cancelled).
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ChunkError {
    /// Create an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create a configuration file error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err =
            ChunkError::invalid_configuration("overlap 200 must be smaller than chunk size 100");
        assert!(err.to_string().contains("overlap 200"));
        assert!(err.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ChunkError::invalid_configuration("x").error_code(),
            "INVALID_CONFIGURATION"
        );
        assert_eq!(ChunkError::config("x").error_code(), "CONFIG_ERROR");
        assert_eq!(ChunkError::internal("x").error_code(), "INTERNAL_ERROR");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(ChunkError::from(io).error_code(), "IO_ERROR");

        let json = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        assert_eq!(ChunkError::from(json).error_code(), "SERIALIZATION_ERROR");
    }
}
