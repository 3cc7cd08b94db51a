//! Error types for geosplit.
//!
//! Every failure of a conversion is surfaced as an [`Error`] variant. Callers
//! that only care about the broad category can use [`Error::kind`].

use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input document does not exist.
    NotFound,
    /// The input document is not valid JSON.
    Parse,
    /// Reading the input or writing the output failed.
    Io,
    /// Anything else: malformed structure, bad configuration, internal bugs.
    Other,
}

/// The main error type for geosplit operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// The input file does not exist.
    #[error("input file '{}' not found", path.display())]
    InputNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The input file exists but could not be read.
    #[error("failed to read input file '{}': {source}", path.display())]
    InputRead {
        /// Path to the input file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid JSON.
    #[error("invalid JSON format in '{}': {source}", path.display())]
    InvalidJson {
        /// Path to the input file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but its structure cannot be flattened.
    #[error("malformed document: {message}")]
    MalformedDocument {
        /// Description of the offending structure.
        message: String,
    },

    // === Output Errors ===
    /// The output file could not be created.
    #[error("failed to create output file '{}': {source}", path.display())]
    OutputCreate {
        /// Path to the output file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a CSV record failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for geosplit operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a malformed document error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            message: message.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The broad category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidJson { .. } => ErrorKind::Parse,
            Self::InputRead { .. } | Self::OutputCreate { .. } | Self::Csv(_) | Self::Io(_) => {
                ErrorKind::Io
            }
            Self::MalformedDocument { .. }
            | Self::ConfigLoad(_)
            | Self::ConfigValidation { .. }
            | Self::Json(_)
            | Self::Internal(_) => ErrorKind::Other,
        }
    }
}
