//! HTTP client for the processing service, built on `gloo-net`.

use gloo_net::http::{Request, Response};
use invoiceblaze_workflow::{
    error_detail, ApiError, ApiResult, Artifact, BatchApi, Endpoint, PickedFile, FILES_FIELD,
};
use web_sys::FormData;

use crate::types::BrowserFile;

/// Browser side of the processing service.
#[derive(Clone, Debug)]
pub struct HttpBatchApi {
    base_url: String,
}

impl HttpBatchApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl BatchApi for HttpBatchApi {
    type File = BrowserFile;

    async fn process_batch(&self, files: &[BrowserFile]) -> ApiResult<()> {
        let form = FormData::new().map_err(|e| ApiError::Transport(format!("Failed to create FormData: {:?}", e)))?;
        for file in files {
            form.append_with_blob_and_filename(FILES_FIELD, file.file(), &file.name())
                .map_err(|e| ApiError::Transport(format!("Failed to append {}: {:?}", file.name(), e)))?;
        }

        let url = Endpoint::ProcessBatch.url(&self.base_url);
        log::debug!("POST {} with {} file(s)", url, files.len());

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(transport)?;

        if !response.ok() {
            return Err(server_error(Endpoint::ProcessBatch, response).await);
        }
        Ok(())
    }

    async fn download_artifact(&self) -> ApiResult<Artifact> {
        let url = Endpoint::DownloadExcel.url(&self.base_url);
        log::debug!("GET {}", url);

        let response = Request::get(&url).send().await.map_err(transport)?;
        if !response.ok() {
            return Err(server_error(Endpoint::DownloadExcel, response).await);
        }

        let bytes = response.binary().await.map_err(transport)?;
        Ok(Artifact::report(bytes))
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn server_error(endpoint: Endpoint, response: Response) -> ApiError {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.binary().await.unwrap_or_default();

    log::warn!("{} answered {} {}", endpoint.path(), status, status_text);
    ApiError::Server {
        status,
        detail: error_detail(endpoint, &status_text, &body),
    }
}
