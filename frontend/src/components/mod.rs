//! UI Components for the InvoiceBlaze application.
//!
//! # Layout Components
//! - [`Header`] - Logo and run indicator
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer with the API location
//!
//! # Feature Components
//! - [`UploadSection`] - PDF picker, selection list and process button
//! - [`ProgressSection`] - Simulated progress and report download
//! - [`ErrorBanner`] - Inline error of the last failed run
//! - [`Toasts`] - Transient notifications

mod error_banner;
mod footer;
mod header;
mod hero;
mod progress;
mod toasts;
mod upload;

pub use error_banner::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use progress::*;
pub use toasts::*;
pub use upload::*;
