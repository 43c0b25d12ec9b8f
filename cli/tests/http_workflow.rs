mod common;

use axum::http::StatusCode;
use common::{closed_port_url, Reply, StubServer};
use invoiceblaze::{runner, ApiClient, CliError, Config, Reporter};
use invoiceblaze_workflow::{
    ApiError, BatchApi, Notification, SelectedFile, UploadWorkflowController, WorkflowState,
    WorkflowTiming,
};
use tempfile::tempdir;

#[derive(Default)]
struct Recorder {
    states: Vec<WorkflowState>,
    notifications: Vec<Notification>,
}

impl Reporter for Recorder {
    fn state(&mut self, state: &WorkflowState) {
        self.states.push(state.clone());
    }

    fn notification(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }
}

fn invoices() -> Vec<SelectedFile> {
    vec![
        SelectedFile::pdf("invoice-001.pdf", b"%PDF-1.7 one".to_vec()),
        SelectedFile::new("notes.txt", "text/plain", b"not an invoice".to_vec()),
        SelectedFile::pdf("invoice-002.pdf", b"%PDF-1.7 two".to_vec()),
    ]
}

#[tokio::test]
async fn full_run_uploads_pdfs_and_saves_report() {
    let server = StubServer::start(Reply::ok_json(), Reply::xlsx(b"PK\x03\x04report")).await;
    let config = server.config();
    let client = ApiClient::new(&config).unwrap();
    let dir = tempdir().unwrap();
    let output = dir.path().join("invoices_report.xlsx");

    let mut controller = UploadWorkflowController::new();
    let mut recorder = Recorder::default();
    runner::process(&mut controller, &client, invoices(), &config.timing, &output, &mut recorder)
        .await
        .unwrap();

    // only the PDFs went out, each under the repeated `files` field
    let parts = server.parts();
    assert_eq!(parts.len(), 2);
    assert!(parts.iter().all(|p| p.field == "files"));
    assert_eq!(parts[0].file_name.as_deref(), Some("invoice-001.pdf"));
    assert_eq!(parts[1].file_name.as_deref(), Some("invoice-002.pdf"));
    assert_eq!(parts[0].content_type.as_deref(), Some("application/pdf"));
    assert_eq!(parts[1].bytes, b"%PDF-1.7 two");

    assert_eq!(std::fs::read(&output).unwrap(), b"PK\x03\x04report");
    assert!(controller.state().is_idle());
    assert!(controller.selection().is_empty());

    assert!(recorder.states.iter().any(|s| s.progress == 100));

    let warnings: Vec<_> = recorder
        .notifications
        .iter()
        .filter(|n| n.title == "Invalid File Type")
        .collect();
    assert_eq!(warnings.len(), 1);
}

#[tokio::test]
async fn batch_error_detail_becomes_inline_error() {
    let server = StubServer::start(
        Reply::detail(StatusCode::INTERNAL_SERVER_ERROR, "parse error"),
        Reply::xlsx(b"unused"),
    )
    .await;
    let config = server.config();
    let client = ApiClient::new(&config).unwrap();
    let dir = tempdir().unwrap();

    let mut controller = UploadWorkflowController::new();
    let mut recorder = Recorder::default();
    let err = runner::process(
        &mut controller,
        &client,
        invoices(),
        &config.timing,
        &dir.path().join("report.xlsx"),
        &mut recorder,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::Api(ApiError::Server { status: 500, .. })));
    let state = controller.state();
    assert_eq!(state.error.as_deref(), Some("parse error"));
    assert!(!state.processing);
    assert_eq!(state.progress, 0);
    assert!(!state.artifact_ready);
    assert_eq!(server.download_calls(), 0);
    assert_eq!(recorder.notifications.last().unwrap().title, "Processing Failed");
}

#[tokio::test]
async fn batch_error_without_json_uses_generic_message() {
    let server = StubServer::start(
        Reply::text(StatusCode::BAD_GATEWAY, "upstream down"),
        Reply::xlsx(b"unused"),
    )
    .await;
    let client = ApiClient::new(&server.config()).unwrap();

    let err = client
        .process_batch(&[SelectedFile::pdf("a.pdf", b"%PDF".to_vec())])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Server {
            status: 502,
            detail: "Unknown server error".into(),
        }
    );
}

#[tokio::test]
async fn download_error_resets_workflow() {
    let server = StubServer::start(
        Reply::ok_json(),
        Reply::detail(StatusCode::NOT_FOUND, "Excel not generated"),
    )
    .await;
    let config = server.config();
    let client = ApiClient::new(&config).unwrap();
    let dir = tempdir().unwrap();
    let output = dir.path().join("report.xlsx");

    let mut controller = UploadWorkflowController::new();
    let mut recorder = Recorder::default();
    let err = runner::process(&mut controller, &client, invoices(), &config.timing, &output, &mut recorder)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Excel not generated");
    let state = controller.state();
    assert_eq!(state.error.as_deref(), Some("Excel not generated"));
    assert!(!state.processing);
    assert_eq!(state.progress, 0);
    assert!(!state.artifact_ready);
    assert!(!output.exists());
    assert_eq!(server.batch_calls(), 1);
    assert_eq!(server.download_calls(), 1);
}

#[tokio::test]
async fn download_error_without_detail_uses_status_text() {
    let server = StubServer::start(
        Reply::ok_json(),
        Reply {
            status: StatusCode::NOT_FOUND,
            content_type: "application/json",
            body: b"{}".to_vec(),
        },
    )
    .await;
    let client = ApiClient::new(&server.config()).unwrap();

    let err = client.download_artifact().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to download: Not Found");
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    let config = Config {
        timing: WorkflowTiming::immediate(),
        ..Config::default()
    }
    .with_api_url(&closed_port_url().await)
    .unwrap();
    let client = ApiClient::new(&config).unwrap();
    let dir = tempdir().unwrap();

    let mut controller = UploadWorkflowController::new();
    let mut recorder = Recorder::default();
    let err = runner::process(
        &mut controller,
        &client,
        invoices(),
        &config.timing,
        &dir.path().join("report.xlsx"),
        &mut recorder,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::Api(ApiError::Transport(_))));
    assert!(controller.state().error.is_some());
    assert!(!controller.state().processing);
    // the selection survives so the user can retry
    assert_eq!(controller.selection().len(), 2);
}

#[tokio::test]
async fn health_returns_service_body() {
    let server = StubServer::start(Reply::ok_json(), Reply::xlsx(b"")).await;
    let client = ApiClient::new(&server.config()).unwrap();

    let body = client.health().await.unwrap();
    assert_eq!(body["status"], "healthy");
}
