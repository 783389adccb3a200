//! Error types for typepack
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for typepack operations
pub type TypepackResult<T> = Result<T, TypepackError>;

/// Main error type for typepack operations
#[derive(Error, Debug)]
pub enum TypepackError {
    /// Parsed typings data file is absent (the upstream parse step has not run)
    #[error("no typings data found at {path} - run the definition parser first")]
    MissingData { path: PathBuf },

    /// Typings data file exists but cannot be decoded
    #[error("invalid typings data in {file}: {message}")]
    InvalidData { file: PathBuf, message: String },

    /// Publish configuration cannot be decoded
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
