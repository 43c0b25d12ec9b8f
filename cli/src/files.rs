//! Local file handling: picking PDFs from disk and saving the report.

use std::path::{Path, PathBuf};

use invoiceblaze_workflow::{ApiError, ApiResult, Artifact, SelectedFile, ARTIFACT_FILE_NAME};

use crate::error::{CliError, CliResult};

/// Read `paths` into selectable files.
///
/// The declared media type is guessed from the extension, the same signal a
/// browser file picker gives.
pub async fn load_files(paths: &[PathBuf]) -> CliResult<Vec<SelectedFile>> {
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        let content = tokio::fs::read(path).await.map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        let media_type = mime_guess::from_path(path).first_or_octet_stream();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        tracing::debug!("Loaded {} ({}, {} bytes)", name, media_type, content.len());
        files.push(SelectedFile::new(name, media_type.essence_str(), content));
    }

    Ok(files)
}

/// Where the report ends up: `output` itself, or the report file name
/// inside it when `output` is a directory. Defaults to the current directory.
pub fn report_path(output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(ARTIFACT_FILE_NAME),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(ARTIFACT_FILE_NAME),
    }
}

/// Write the downloaded report to `path`.
pub async fn save_artifact(path: &Path, artifact: &Artifact) -> ApiResult<()> {
    tokio::fs::write(path, &artifact.bytes)
        .await
        .map_err(|e| ApiError::Save(format!("{}: {}", path.display(), e)))
}
