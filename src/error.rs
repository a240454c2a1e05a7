//! Error types for the clvdb data-access layer.

use std::io;
use std::path::PathBuf;

/// Result type alias for clvdb operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for clvdb.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database error.
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The handle has no live connection.
    #[error("Database {} is not open", .0.display())]
    NotOpen(PathBuf),

    /// `open` was called on a handle that already holds a connection.
    #[error("Database {} is already open", .0.display())]
    AlreadyOpen(PathBuf),

    /// Some of the per-id updates failed; the others were applied.
    #[error("{} command update(s) failed, ids {failed:?}: {source}", .failed.len())]
    PartialUpdate {
        failed: Vec<i64>,
        source: rusqlite::Error,
    },
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Db(_) => "Db",
            Error::Io(_) => "Io",
            Error::Json(_) => "Json",
            Error::NotOpen(_) => "NotOpen",
            Error::AlreadyOpen(_) => "AlreadyOpen",
            Error::PartialUpdate { .. } => "PartialUpdate",
        }
    }
}
