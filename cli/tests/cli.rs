mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use axum::http::StatusCode;
use common::{closed_port_url, Reply, StubServer};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn invoiceblaze(cwd: &Path, api_url: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("invoiceblaze");
    cmd.current_dir(cwd)
        .env("INVOICEBLAZE_API_URL", api_url)
        .env_remove("RUST_LOG");
    cmd
}

fn stderr_of(cmd: &mut Command) -> (bool, String) {
    let output = cmd.output().expect("run invoiceblaze");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn help_lists_commands() {
    let out = cargo_bin_cmd!("invoiceblaze")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let help = String::from_utf8_lossy(&out);

    for command in ["process", "submit", "download", "health"] {
        assert!(help.contains(command), "missing {command} in:\n{help}");
    }
    assert!(help.contains("--api-url"));
}

#[test]
fn process_requires_files() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("invoiceblaze")
        .current_dir(dir.path())
        .arg("process")
        .assert()
        .failure();
}

#[tokio::test]
async fn process_without_pdfs_fails_before_upload() {
    let server = StubServer::start(Reply::ok_json(), Reply::xlsx(b"PK")).await;
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "not an invoice").unwrap();

    let mut cmd = invoiceblaze(dir.path(), &server.base_url);
    cmd.args(["process", "notes.txt"]);
    let (ok, stderr) = tokio::task::spawn_blocking(move || stderr_of(&mut cmd))
        .await
        .unwrap();

    assert!(!ok);
    assert!(stderr.contains("Invalid File Type"), "{stderr}");
    assert!(stderr.contains("No Files Selected"), "{stderr}");
    assert_eq!(server.batch_calls(), 0);
    assert!(!dir.path().join("invoices_report.xlsx").exists());
}

#[tokio::test]
async fn process_writes_report_to_working_directory() {
    let server = StubServer::start(Reply::ok_json(), Reply::xlsx(b"PK\x03\x04cli")).await;
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("invoice.pdf"), b"%PDF-1.7").unwrap();

    let mut cmd = invoiceblaze(dir.path(), &server.base_url);
    cmd.args(["process", "invoice.pdf"]);
    let (ok, stderr) = tokio::task::spawn_blocking(move || stderr_of(&mut cmd))
        .await
        .unwrap();

    assert!(ok, "{stderr}");
    assert_eq!(
        fs::read(dir.path().join("invoices_report.xlsx")).unwrap(),
        b"PK\x03\x04cli"
    );
    let parts = server.parts();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].file_name.as_deref(), Some("invoice.pdf"));
    assert_eq!(parts[0].content_type.as_deref(), Some("application/pdf"));
}

#[tokio::test]
async fn health_against_closed_port_fails() {
    let url = closed_port_url().await;
    let dir = TempDir::new().unwrap();

    let mut cmd = invoiceblaze(dir.path(), &url);
    cmd.arg("health");
    let (ok, stderr) = tokio::task::spawn_blocking(move || stderr_of(&mut cmd))
        .await
        .unwrap();

    assert!(!ok);
    assert!(stderr.contains("❌ Error:"), "{stderr}");
}

#[test]
fn invalid_api_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    let out = invoiceblaze(dir.path(), "ftp://example.com")
        .arg("health")
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    assert!(String::from_utf8_lossy(&out).contains("http or https"));
}

#[tokio::test]
async fn download_fetches_report_without_prior_upload() {
    let server = StubServer::start(Reply::ok_json(), Reply::xlsx(b"PK\x03\x04direct")).await;
    let dir = TempDir::new().unwrap();

    let mut cmd = invoiceblaze(dir.path(), &server.base_url);
    cmd.arg("download");
    let (ok, stderr) = tokio::task::spawn_blocking(move || stderr_of(&mut cmd))
        .await
        .unwrap();

    assert!(ok, "{stderr}");
    assert!(!stderr.contains('%'), "no progress expected:\n{stderr}");
    assert_eq!(server.batch_calls(), 0);
    assert_eq!(server.download_calls(), 1);
    assert_eq!(
        fs::read(dir.path().join("invoices_report.xlsx")).unwrap(),
        b"PK\x03\x04direct"
    );
}

#[tokio::test]
async fn server_error_prints_http_status() {
    let server = StubServer::start(
        Reply::ok_json(),
        Reply::detail(StatusCode::INTERNAL_SERVER_ERROR, "parse error"),
    )
    .await;
    let dir = TempDir::new().unwrap();

    let mut cmd = invoiceblaze(dir.path(), &server.base_url);
    cmd.arg("download");
    let (ok, stderr) = tokio::task::spawn_blocking(move || stderr_of(&mut cmd))
        .await
        .unwrap();

    assert!(!ok);
    assert!(stderr.contains("❌ Error: parse error (HTTP 500)"), "{stderr}");
    assert!(!dir.path().join("invoices_report.xlsx").exists());
}

#[test]
fn download_help_describes_direct_fetch() {
    let out = cargo_bin_cmd!("invoiceblaze")
        .args(["download", "--help"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let help = String::from_utf8_lossy(&out);

    assert!(help.contains("/download-excel"), "{help}");
    assert!(help.contains("no ready check"), "{help}");
}
