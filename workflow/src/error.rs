//! Error types for the upload workflow.
//!
//! - [`WorkflowError`] - validation errors raised by the controller itself
//! - [`ApiError`] - transport, server and save errors reported by a front end
//!
//! Validation errors never touch the workflow state. API errors always end
//! the current run.

use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised locally by the controller before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Submit was requested with an empty selection.
    #[error("Please upload one or more PDF files to process.")]
    NoFilesSelected,

    /// Download was requested before the report was marked ready.
    #[error("The Excel file is not yet available for download.")]
    ArtifactNotReady,

    /// A run is already in progress.
    #[error("A batch is already being processed.")]
    RunInProgress,

    /// A download for the current run is already in flight.
    #[error("The Excel file is already being downloaded.")]
    DownloadInProgress,

    /// The report of the current run was already downloaded.
    #[error("The Excel report has already been downloaded.")]
    AlreadyDownloaded,
}

// =============================================================================
// API Errors
// =============================================================================

/// Errors from the external processing service or from saving its output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response. Displays the detail only, it is shown to the user as is.
    #[error("{detail}")]
    Server { status: u16, detail: String },

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The report was fetched but could not be saved locally.
    #[error("Could not save report: {0}")]
    Save(String),
}

impl ApiError {
    /// HTTP status of a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for controller operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Result type for API calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_displays_detail_only() {
        let err = ApiError::Server {
            status: 500,
            detail: "parse error".into(),
        };
        assert_eq!(err.to_string(), "parse error");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_save_error_format() {
        let err = ApiError::Save("permission denied".into());
        assert!(err.to_string().contains("permission denied"));
        assert_eq!(err.status(), None);
    }
}
