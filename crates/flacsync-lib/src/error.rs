use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlacSyncError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog index at {path}: {reason}")]
    MalformedCatalog { path: PathBuf, reason: String },

    #[error("Transfer failed for {url}: {reason}")]
    Transfer { url: String, reason: String },

    #[error("Directory creation failed at {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "Mirror incomplete: {failed} transfer failure(s) and {mismatched} checksum mismatch(es) out of {total} entries"
    )]
    MirrorIncomplete {
        failed: usize,
        mismatched: usize,
        total: usize,
    },

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
