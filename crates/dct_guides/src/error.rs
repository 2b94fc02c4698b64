//! Error types for guide queries.
//!
//! Lookups that can legitimately find nothing (unknown hero, missing tooltip)
//! return `Option` instead. [`Error`] covers programmer errors, such as
//! projecting a build that was never resolved, and loading string bundles.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The hero has no entry in the content store.
    #[error("Hero not found: {0}")]
    HeroNotFound(String),

    /// The build index is past the end of the hero's build list.
    #[error("Build index {index} out of range for '{hero}' ({count} builds)")]
    BuildIndexOutOfRange {
        hero: String,
        index: usize,
        count: usize,
    },

    /// Reading a string bundle failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A string bundle is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A string bundle parsed, but its root is not an object.
    #[error("Invalid string bundle: {0}")]
    InvalidBundle(String),
}
