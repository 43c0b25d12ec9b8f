//! InvoiceBlaze - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading invoice PDFs in batch and
//! downloading the Excel report generated by the processing service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (run indicator)                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (picker, selection, process)             │
//! │  ├── ProgressSection (bar, status, download)                │
//! │  └── ErrorBanner                                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer (API location)                    Toasts (overlay)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state lives in one `UploadWorkflowController` behind a
//! [`WorkflowHandle`]; components only read it and call its operations.
//!
//! # Modules
//!
//! - [`config`] - Build-time configuration
//! - [`types`] - Browser file wrapper and toast queue
//! - [`state`] - Reactive handle on the workflow controller
//! - [`components`] - UI components (Header, Upload, Progress, etc.)
//! - [`services`] - Processing service communication and browser download

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod state;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use components::*;
pub use config::*;
pub use services::*;
pub use state::{Controller, WorkflowHandle};
pub use types::{BrowserFile, ToastEntry, ToastQueue};

// =============================================================================
// Application
// =============================================================================

/// Root component, mounted by `main.rs`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let api = HttpBatchApi::new(api_base_url());
    log::info!("Processing API at {}", api.base_url());

    let workflow = WorkflowHandle::new(api);
    workflow.drive_timers(timing());

    view! {
        <Header workflow=workflow/>

        <div class="container">
            <Hero/>
            <UploadSection workflow=workflow/>
            <ProgressSection workflow=workflow/>
            <ErrorBanner workflow=workflow/>
        </div>

        <Toasts toasts=workflow.toasts()/>
        <Footer api_url=workflow.api_url()/>
    }
}
