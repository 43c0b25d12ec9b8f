//! Processing service communication.
//!
//! # Services
//!
//! - [`api`] - Batch upload and report download over `gloo-net`
//! - [`download`] - Saving the report through the browser

pub mod api;
pub mod download;

pub use api::*;
pub use download::*;
