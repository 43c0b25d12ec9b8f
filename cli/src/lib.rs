//! # InvoiceBlaze CLI
//!
//! Command-line front end of the invoice upload workflow. Sends PDF
//! invoices to the processing service in one batch and saves the generated
//! Excel report.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │  PDF files  │────▶│   files     │────▶│  runner (tokio)  │────▶│ invoices_    │
//! │   on disk   │     │ (mime_guess)│     │  + controller    │     │ report.xlsx  │
//! └─────────────┘     └─────────────┘     └──────────────────┘     └──────────────┘
//!                                                  │ ApiClient (reqwest)
//!                                                  ▼
//!                                         processing service
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use invoiceblaze::{runner, ApiClient, Config, ConsoleReporter};
//! use invoiceblaze_workflow::UploadWorkflowController;
//!
//! let config = Config::from_env()?;
//! let client = ApiClient::new(&config)?;
//! let files = invoiceblaze::load_files(&paths).await?;
//! let mut controller = UploadWorkflowController::new();
//! runner::process(&mut controller, &client, files, &config.timing, &out, &mut ConsoleReporter::default()).await?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - CLI error type
//! - [`config`] - Environment and flag configuration
//! - [`client`] - `reqwest` implementation of the service API
//! - [`files`] - Loading PDFs and saving the report
//! - [`runner`] - Async driver of the workflow controller

pub mod client;
pub mod config;
pub mod error;
pub mod files;
pub mod runner;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::ApiClient;
pub use config::Config;
pub use error::{CliError, CliResult};
pub use files::{load_files, report_path, save_artifact};
pub use runner::{ConsoleReporter, Reporter};
