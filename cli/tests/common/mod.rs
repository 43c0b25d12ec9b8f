#![allow(dead_code)]

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use invoiceblaze::Config;
use invoiceblaze_workflow::WorkflowTiming;

/// Canned answer of one stub endpoint.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn ok_json() -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/json",
            body: br#"{"message":"processed"}"#.to_vec(),
        }
    }

    pub fn xlsx(bytes: &[u8]) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            body: bytes.to_vec(),
        }
    }

    pub fn detail(status: StatusCode, detail: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: serde_json::to_vec(&json!({ "detail": detail })).unwrap(),
        }
    }

    pub fn text(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.as_bytes().to_vec(),
        }
    }
}

/// One multipart field received by the stub.
#[derive(Clone, Debug)]
pub struct ReceivedPart {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
struct StubState {
    batch: Reply,
    download: Reply,
    parts: Arc<Mutex<Vec<ReceivedPart>>>,
    batch_calls: Arc<Mutex<usize>>,
    download_calls: Arc<Mutex<usize>>,
}

/// Throwaway stand-in for the processing service, bound to a random port.
pub struct StubServer {
    pub base_url: String,
    state: StubState,
}

impl StubServer {
    pub async fn start(batch: Reply, download: Reply) -> Self {
        let state = StubState {
            batch,
            download,
            parts: Arc::new(Mutex::new(Vec::new())),
            batch_calls: Arc::new(Mutex::new(0)),
            download_calls: Arc::new(Mutex::new(0)),
        };

        let app = Router::new()
            .route("/health", get(health))
            .route("/process-batch", post(process_batch))
            .route("/download-excel", get(download_excel))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            timing: WorkflowTiming::immediate(),
            ..Config::default()
        }
        .with_api_url(&self.base_url)
        .expect("valid stub url")
    }

    pub fn parts(&self) -> Vec<ReceivedPart> {
        self.state.parts.lock().unwrap().clone()
    }

    pub fn batch_calls(&self) -> usize {
        *self.state.batch_calls.lock().unwrap()
    }

    pub fn download_calls(&self) -> usize {
        *self.state.download_calls.lock().unwrap()
    }
}

/// Base URL nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}

fn respond(reply: &Reply) -> impl IntoResponse {
    (
        reply.status,
        [(axum::http::header::CONTENT_TYPE, reply.content_type)],
        reply.body.clone(),
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

async fn process_batch(State(state): State<StubState>, mut multipart: Multipart) -> impl IntoResponse {
    *state.batch_calls.lock().unwrap() += 1;

    while let Ok(Some(field)) = multipart.next_field().await {
        let part = ReceivedPart {
            field: field.name().unwrap_or_default().to_string(),
            file_name: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
            bytes: field.bytes().await.map(|b| b.to_vec()).unwrap_or_default(),
        };
        state.parts.lock().unwrap().push(part);
    }

    respond(&state.batch)
}

async fn download_excel(State(state): State<StubState>) -> impl IntoResponse {
    *state.download_calls.lock().unwrap() += 1;
    respond(&state.download)
}
