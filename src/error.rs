use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid object path: {0}")]
    InvalidPath(String),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UploadError>;
