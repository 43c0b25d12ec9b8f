//! HTTP client for the processing service.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use invoiceblaze::{ApiClient, Config};
//! use invoiceblaze_workflow::BatchApi;
//!
//! let client = ApiClient::new(&Config::from_env()?)?;
//! client.process_batch(&files).await?;
//! let report = client.download_artifact().await?;
//! ```

use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde_json::Value;

use invoiceblaze_workflow::{
    error_detail, ApiError, ApiResult, Artifact, BatchApi, Endpoint, SelectedFile, FILES_FIELD,
};

use crate::config::Config;
use crate::error::{CliError, CliResult};

/// `reqwest` client bound to one processing service.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> CliResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CliError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the service is up. Returns its JSON body, or `Null` when
    /// the body is not JSON.
    pub async fn health(&self) -> ApiResult<Value> {
        let url = Endpoint::Health.url(&self.base_url);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(transport)?;
        let response = ensure_success(Endpoint::Health, response).await?;
        let body = response.bytes().await.map_err(transport)?;
        Ok(serde_json::from_slice(&body).unwrap_or(Value::Null))
    }
}

impl BatchApi for ApiClient {
    type File = SelectedFile;

    async fn process_batch(&self, files: &[SelectedFile]) -> ApiResult<()> {
        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.content.clone())
                .file_name(file.name.clone())
                .mime_str(&file.media_type)
                .map_err(transport)?;
            form = form.part(FILES_FIELD, part);
        }

        let url = Endpoint::ProcessBatch.url(&self.base_url);
        tracing::debug!("POST {} ({} file(s))", url, files.len());

        let response = self.http.post(&url).multipart(form).send().await.map_err(transport)?;
        ensure_success(Endpoint::ProcessBatch, response).await?;
        Ok(())
    }

    async fn download_artifact(&self) -> ApiResult<Artifact> {
        let url = Endpoint::DownloadExcel.url(&self.base_url);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(transport)?;
        let response = ensure_success(Endpoint::DownloadExcel, response).await?;
        let bytes = response.bytes().await.map_err(transport)?;

        tracing::debug!("Received {} bytes", bytes.len());
        Ok(Artifact::report(bytes.to_vec()))
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Turn a non-2xx response into [`ApiError::Server`] with the user-facing detail.
async fn ensure_success(endpoint: Endpoint, response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let status_text = status.canonical_reason().unwrap_or("Unknown status");
    let body = response.bytes().await.unwrap_or_default();
    let detail = error_detail(endpoint, status_text, &body);

    tracing::warn!("{} answered {}: {}", endpoint.path(), status, detail);
    Err(ApiError::Server {
        status: status.as_u16(),
        detail,
    })
}
