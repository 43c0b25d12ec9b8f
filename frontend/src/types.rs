//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - Browser files fed to the workflow controller
//! - **Toast Types** - Transient notifications on screen

use invoiceblaze_workflow::{Notification, PickedFile};
use web_sys::File;

use crate::config::MAX_TOASTS;

// =============================================================================
// File Types
// =============================================================================

/// A file chosen in the browser's file picker.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserFile(pub File);

impl BrowserFile {
    pub fn file(&self) -> &File {
        &self.0
    }
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl PickedFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }
}

// =============================================================================
// Toast Types
// =============================================================================

/// A notification currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    /// Unique within the page, used to dismiss it
    pub id: u64,
    pub notification: Notification,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

/// Toasts on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    entries: Vec<ToastEntry>,
}

impl ToastQueue {
    /// Show a notification and return its id.
    pub fn push(&mut self, notification: Notification, timestamp: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.entries.push(ToastEntry {
            id,
            notification,
            timestamp: timestamp.into(),
        });
        if self.entries.len() > MAX_TOASTS {
            let overflow = self.entries.len() - MAX_TOASTS;
            self.entries.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
