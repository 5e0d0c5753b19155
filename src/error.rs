//! Error types for the snapshot loading boundary.
//!
//! Derivation functions themselves are infallible: an absent collection is
//! policy (read as empty) and every ratio defines a zero-denominator
//! fallback. The only failures this crate owns are at the JSON boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading a record collection from disk.
///
/// A *missing* file is not an error — the collection simply has not been
/// produced yet. These variants cover files that exist but cannot be used.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}
