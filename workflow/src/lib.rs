//! # InvoiceBlaze workflow
//!
//! The select → submit → ready → download → reset workflow shared by the
//! InvoiceBlaze front ends. The actual invoice processing happens on an
//! external HTTP service; this crate only tracks what the user sees.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  begin_* / complete_*  ┌──────────────────────────┐
//! │  Front end  │───────────────────────▶│ UploadWorkflowController │
//! │ (CLI / Web) │◀───────────────────────│  state + notifications   │
//! └─────────────┘  pending_timer / fire  └──────────────────────────┘
//!        │
//!        ▼  BatchApi
//! ┌─────────────────────────────────────┐
//! │ POST /process-batch                 │
//! │ GET  /download-excel                │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Validation and API error types
//! - [`config`] - Constants and timing of the simulated progress
//! - [`types`] - Files, state, timers, notifications
//! - [`api`] - Wire contract of the processing service
//! - [`controller`] - The workflow state machine

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{error_detail, BatchApi, Endpoint};
pub use config::*;
pub use controller::{Submission, UploadWorkflowController};
pub use error::{ApiError, ApiResult, WorkflowError, WorkflowResult};
pub use types::{
    Artifact, Notification, NotificationLevel, PickedFile, RunId, ScheduledTimer, SelectedFile,
    SelectionOutcome, TimerKind, WorkflowState,
};
