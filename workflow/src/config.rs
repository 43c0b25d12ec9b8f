//! Workflow constants and timing.
//!
//! Progress values and delays of the simulated progress sequence, plus the
//! defaults both front ends share for reaching the processing service.

use std::time::Duration;

/// Default base URL of the processing service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "INVOICEBLAZE_API_URL";

/// The only media type accepted at selection time.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Media type of the downloaded report.
pub const XLSX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// File name the report is saved under.
pub const ARTIFACT_FILE_NAME: &str = "invoices_report.xlsx";

/// Multipart field name, repeated once per file.
pub const FILES_FIELD: &str = "files";

/// Progress added on every tick.
pub const PROGRESS_STEP: u8 = 10;

/// Ticking stops here and the download link is prepared.
pub const PREPARATION_THRESHOLD: u8 = 90;

/// Progress once the report is ready.
pub const READY_PROGRESS: u8 = 95;

/// Progress while the report is downloading.
pub const DOWNLOADING_PROGRESS: u8 = 98;

/// Progress after a completed download.
pub const COMPLETE_PROGRESS: u8 = 100;

/// Delays of the simulated progress sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowTiming {
    /// Interval between progress ticks.
    pub tick: Duration,
    /// Delay between reaching the threshold and marking the report ready.
    pub preparation: Duration,
    /// Delay between a completed download and the full reset.
    pub reset: Duration,
}

impl WorkflowTiming {
    /// Zero delays, for driving the workflow as fast as possible.
    pub const fn immediate() -> Self {
        Self {
            tick: Duration::ZERO,
            preparation: Duration::ZERO,
            reset: Duration::ZERO,
        }
    }
}

impl Default for WorkflowTiming {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(500),
            preparation: Duration::from_millis(1000),
            reset: Duration::from_millis(2000),
        }
    }
}
