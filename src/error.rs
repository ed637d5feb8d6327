//! Error taxonomy for the load pipeline.
//!
//! These never cross the public `load` API: each tier catches its own
//! failures, logs them, and demotes them to "zero records for this tier".

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("Cache file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("File IO error: {0}")]
    FileIo(#[from] std::io::Error),
}
