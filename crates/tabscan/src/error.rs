//! Error types for the tabscan library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tabscan operations.
#[derive(Debug, Error)]
pub enum TabscanError {
    /// Source path missing or unreadable.
    #[error("cannot access '{path}': {source}")]
    DataAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source exists but cannot be parsed as tabular data.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A structurally valid but empty table was passed for inspection.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<csv::Error> for TabscanError {
    fn from(err: csv::Error) -> Self {
        TabscanError::MalformedInput(err.to_string())
    }
}

/// Result type alias for tabscan operations.
pub type Result<T> = std::result::Result<T, TabscanError>;
