//! Error types for loading hero guide content.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading a content file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON content document is malformed or doesn't match the data model.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML content document is malformed or doesn't match the data model.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The content file extension is neither `.json` nor `.toml`.
    #[error("Unsupported content format: {0}")]
    UnsupportedFormat(Utf8PathBuf),

    /// A string could not be parsed into one of the content key enums.
    #[error("Invalid {kind}: {value}")]
    InvalidKey { kind: &'static str, value: String },
}
