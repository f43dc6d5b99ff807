use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeanJsonError>;

#[derive(Debug, Error)]
pub enum LeanJsonError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in '{}': {source}", .path.display())]
    Syntax {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("depth limit exceeded - structure nested too deeply")]
    Depth,
}
