//! Error types shared by the library modules

use std::path::PathBuf;
use thiserror::Error;

/// Failure to persist a preference. Reads never fail: an unreadable store is
/// treated as empty.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no configuration directory available")]
    NoConfigDir,

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize preferences: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(all(windows, feature = "winreg"))]
    #[error("registry error: {0}")]
    Registry(std::io::Error),
}

/// Invalid artwork catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("artwork id {0} appears more than once")]
    DuplicateId(u32),

    #[error("artwork {id} has an invalid aspect ratio {value:?} (expected \"W/H\")")]
    InvalidAspectRatio { id: u32, value: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LightboxError {
    #[error("artwork index {index} out of range (gallery has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },
}
