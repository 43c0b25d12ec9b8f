//! Application configuration.
//!
//! The API base URL is fixed at build time: set `INVOICEBLAZE_API_URL`
//! when running `trunk build`, otherwise the local development server is
//! used.

use invoiceblaze_workflow::{WorkflowTiming, DEFAULT_API_URL};

/// Application name shown in the header and the page title.
pub const APP_NAME: &str = "InvoiceBlaze";

/// How long a toast stays on screen (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Maximum toasts shown at once. Older ones are dropped first.
pub const MAX_TOASTS: usize = 5;

/// Processing service base URL for this build.
pub fn api_base_url() -> String {
    resolve_api_url(option_env!("INVOICEBLAZE_API_URL"))
}

fn resolve_api_url(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Delays of the simulated progress.
pub fn timing() -> WorkflowTiming {
    WorkflowTiming::default()
}
