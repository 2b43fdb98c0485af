//! Error types for file collection
//!
//! Library operations return [`FilesError`]. The CLI wraps these in
//! `anyhow` the same way it wraps configuration and I/O failures.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while listing or filtering files
#[derive(Error, Debug)]
pub enum FilesError {
    #[error("Root directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("Failed to traverse {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regular expression '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

/// Result alias for file collection operations
pub type Result<T> = std::result::Result<T, FilesError>;
