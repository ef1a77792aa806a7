//! FaceIt error types

use std::io;
use thiserror::Error;

/// Errors raised at the edges of the face core (config files, text input).
///
/// The expression model and geometry are total and never fail.
#[derive(Error, Debug)]
pub enum FaceError {
    /// IO error when reading a config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Config parsing error
    #[error("Config parsing error: {0}")]
    Parse(String),

    /// A name that does not match any variant of a model enum
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// A value that parsed but is out of range
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<toml::de::Error> for FaceError {
    fn from(err: toml::de::Error) -> Self {
        FaceError::Parse(err.to_string())
    }
}

/// Result type alias for FaceIt operations
pub type Result<T> = std::result::Result<T, FaceError>;
