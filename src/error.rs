//! Error types for the prettifier
//!
//! Malformed *source code* never produces an error. These variants only
//! cover the API boundary: undecodable input, configuration and language
//! files, and user-supplied patterns.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for prettifier operations
pub type Result<T> = std::result::Result<T, PrettifyError>;

/// Prettifier error types
#[derive(Error, Debug)]
pub enum PrettifyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("Invalid configuration in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid pattern for rule '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Message(String),
}
