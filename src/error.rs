use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the search tool.
///
/// Ranking itself never fails; these cover the store and the CLI around it.
#[derive(Error, Debug)]
pub enum FragSearchError {
    /// Store file could not be read or written
    #[error("Storage unreadable at {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store file exists but is not a JSON array of records
    #[error("Malformed store at {}: {source}", .path.display())]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No query supplied
    #[error("Query missing.")]
    QueryMissing,
}

impl FragSearchError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            FragSearchError::QueryMissing => 2,
            _ => 1,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FragSearchError>;
