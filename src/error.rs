//! Error types and handling for the swagger trimming pipeline

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for swagger trimming operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for swagger trimming operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP error ({status}) fetching {url}")]
    Status { url: String, status: u16 },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("No swagger snapshot found in {}", .0.display())]
    NoSnapshot(PathBuf),

    #[error("Invalid snapshot version {version:?} in {}", .path.display())]
    InvalidVersion { path: PathBuf, version: String },
}

impl Error {
    /// Helper for creating a `Config` error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
