//! Common types of the upload workflow.
//!
//! # Categories
//!
//! - **File Types** - [`PickedFile`], [`SelectedFile`], [`SelectionOutcome`]
//! - **State Types** - [`WorkflowState`], [`RunId`]
//! - **Timer Types** - [`ScheduledTimer`], [`TimerKind`]
//! - **Notification Types** - [`Notification`], [`NotificationLevel`]
//! - **Artifact Types** - [`Artifact`]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::config::{WorkflowTiming, ARTIFACT_FILE_NAME, PDF_MEDIA_TYPE};

// =============================================================================
// File Types
// =============================================================================

/// A file handed over by a platform file picker.
///
/// The browser front end wraps a `web_sys::File`, the CLI holds the bytes
/// itself. The controller only needs the name and the declared media type.
pub trait PickedFile: Clone {
    /// File name, used as the key of the selection list.
    fn name(&self) -> String;

    /// Media type declared by the platform.
    fn media_type(&self) -> String;

    /// Whether the declared media type is PDF.
    fn is_pdf(&self) -> bool {
        self.media_type() == PDF_MEDIA_TYPE
    }
}

/// An in-memory file with its content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            content,
        }
    }

    /// Shorthand for a file declared as `application/pdf`.
    pub fn pdf(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self::new(name, PDF_MEDIA_TYPE, content)
    }
}

impl PickedFile for SelectedFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }
}

/// Result of a file selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub accepted: usize,
    pub rejected: usize,
}

// =============================================================================
// State Types
// =============================================================================

/// Identifier of one submit run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(pub u64);

impl RunId {
    pub fn next(self) -> Self {
        RunId(self.0 + 1)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}

/// The record a front end renders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    /// A run is in progress
    pub processing: bool,
    /// 0 to 100, never decreases within a run
    pub progress: u8,
    /// Status line under the progress bar
    pub status: Option<String>,
    /// Inline error banner
    pub error: Option<String>,
    /// The report can be downloaded
    pub artifact_ready: bool,
}

impl WorkflowState {
    /// Whether the state is the one a fresh controller starts with.
    pub fn is_idle(&self) -> bool {
        *self == WorkflowState::default()
    }
}

// =============================================================================
// Timer Types
// =============================================================================

/// What a scheduled timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Advance the simulated progress.
    ProgressTick,
    /// Mark the report ready after the preparation delay.
    Preparation,
    /// Return to idle after a completed download.
    Reset,
}

impl TimerKind {
    /// Delay before this timer fires.
    pub fn delay(&self, timing: &WorkflowTiming) -> Duration {
        match self {
            TimerKind::ProgressTick => timing.tick,
            TimerKind::Preparation => timing.preparation,
            TimerKind::Reset => timing.reset,
        }
    }
}

/// The single timer the controller currently wants scheduled.
///
/// Carries the run and the progress it was computed for, so a timer that
/// fires after the state moved on no longer matches and is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScheduledTimer {
    pub run: RunId,
    pub kind: TimerKind,
    pub progress: u8,
}

impl ScheduledTimer {
    pub fn delay(&self, timing: &WorkflowTiming) -> Duration {
        self.kind.delay(timing)
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "toast-success",
            NotificationLevel::Warning => "toast-warning",
            NotificationLevel::Error => "toast-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "✅",
            NotificationLevel::Warning => "⚠️",
            NotificationLevel::Error => "❌",
        }
    }
}

/// A transient, non-blocking message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, description)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.level.emoji(), self.title, self.description)
    }
}

// =============================================================================
// Artifact Types
// =============================================================================

/// The downloaded report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Wraps report bytes under the fixed report file name.
    pub fn report(bytes: Vec<u8>) -> Self {
        Self {
            file_name: ARTIFACT_FILE_NAME.to_string(),
            bytes,
        }
    }
}
