//! Wire contract of the external processing service.
//!
//! | Method | Path              | Success                    |
//! |--------|-------------------|----------------------------|
//! | POST   | `/process-batch`  | any 2xx, body ignored      |
//! | GET    | `/download-excel` | 2xx with the xlsx payload  |
//! | GET    | `/health`         | 2xx                        |
//!
//! Failures may carry a JSON body `{ "detail": string }`.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiResult;
use crate::types::{Artifact, PickedFile};

/// Endpoints of the processing service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    ProcessBatch,
    DownloadExcel,
    Health,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::ProcessBatch => "/process-batch",
            Endpoint::DownloadExcel => "/download-excel",
            Endpoint::Health => "/health",
        }
    }

    /// Full URL of the endpoint under `base`.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Message used when the error body is not JSON at all.
    fn unparsable_body_message(&self) -> &'static str {
        match self {
            Endpoint::ProcessBatch => "Unknown server error",
            Endpoint::DownloadExcel => "Excel file not found or error generating it.",
            Endpoint::Health => "Health check failed",
        }
    }

    /// Message used when the body is JSON without a usable detail.
    fn status_message(&self, status_text: &str) -> String {
        match self {
            Endpoint::ProcessBatch => format!("Server error: {}", status_text),
            Endpoint::DownloadExcel => format!("Failed to download: {}", status_text),
            Endpoint::Health => format!("Health check failed: {}", status_text),
        }
    }
}

/// Error body of the processing service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

/// User-facing message for a non-2xx response.
///
/// A non-empty string `detail` wins. A body that is not JSON gets the
/// endpoint's generic message, a JSON body without a string detail gets the
/// status text.
pub fn error_detail(endpoint: Endpoint, status_text: &str, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody { detail: Value::String(detail) }) if !detail.is_empty() => detail,
        Ok(_) => endpoint.status_message(status_text),
        Err(_) => endpoint.unparsable_body_message().to_string(),
    }
}

/// Client side of the processing service.
///
/// Implemented over `reqwest` by the CLI and over `gloo-net` by the
/// browser front end. Futures are not required to be `Send`: both front
/// ends drive the workflow from a single task.
#[allow(async_fn_in_trait)]
pub trait BatchApi {
    type File: PickedFile;

    /// Send every file as one multipart request, field `files` repeated.
    async fn process_batch(&self, files: &[Self::File]) -> ApiResult<()>;

    /// Fetch the generated report.
    async fn download_artifact(&self) -> ApiResult<Artifact>;
}
