//! Error types for the command-line client.
//!
//! [`CliError`] wraps the workflow's own errors so `?` works from the
//! controller and the HTTP client up to `main`.

use std::path::PathBuf;
use thiserror::Error;

use invoiceblaze_workflow::{ApiError, WorkflowError};

/// Top-level CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected by the workflow before any request was sent.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// Processing service or local save failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A selected file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl CliError {
    /// HTTP status when the processing service answered with an error.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            CliError::Api(err) => err.status(),
            _ => None,
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
