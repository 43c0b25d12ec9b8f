//! Upload workflow state machine.
//!
//! ```text
//!            select / remove
//!   ┌────────┐  begin_submit  ┌────────────┐ begin_download ┌─────────────┐
//!   │  Idle  │───────────────▶│ Processing │───────────────▶│ Downloading │
//!   └────────┘                └────────────┘                └─────────────┘
//!       ▲   ▲   any failure        │ ticks 0→90, prepare→95       │ ok
//!       │   └──────────────────────┴──────────────────────────────┤
//!       │            Reset timer          ┌───────────┐           │
//!       └─────────────────────────────────│ Completed │◀──────────┘
//!                                         └───────────┘
//! ```
//!
//! The controller owns no clock and does no I/O. Front ends call the
//! `begin_*` operations, perform the network call, then report the outcome
//! with the matching `complete_*` operation. Timers work the same way:
//! [`UploadWorkflowController::pending_timer`] says what to schedule and
//! [`UploadWorkflowController::fire`] applies it once the delay elapsed.

use log::{debug, info, warn};

use crate::config::{
    COMPLETE_PROGRESS, DOWNLOADING_PROGRESS, PREPARATION_THRESHOLD, PROGRESS_STEP, READY_PROGRESS,
};
use crate::error::{ApiError, ApiResult, WorkflowError, WorkflowResult};
use crate::types::{
    Notification, PickedFile, RunId, ScheduledTimer, SelectionOutcome, TimerKind, WorkflowState,
};

pub const STATUS_UPLOADING: &str = "Uploading files...";
pub const STATUS_SERVER_PROCESSING: &str = "Upload complete. Server is processing invoices...";
pub const STATUS_PREPARING: &str = "Processing almost complete. Preparing download link...";
pub const STATUS_READY: &str = "Excel report is ready for download.";
pub const STATUS_DOWNLOADING: &str = "Downloading Excel file...";
pub const STATUS_DOWNLOAD_COMPLETE: &str = "Download complete!";

/// Where the current run stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Processing,
    Downloading,
    Completed,
}

/// Files of an accepted submit, to be sent as one batch.
#[derive(Clone, Debug)]
pub struct Submission<F> {
    pub run: RunId,
    pub files: Vec<F>,
}

/// Owns the selection and the [`WorkflowState`] of one front end.
#[derive(Clone, Debug)]
pub struct UploadWorkflowController<F: PickedFile> {
    selection: Vec<F>,
    state: WorkflowState,
    run: RunId,
    phase: Phase,
    notifications: Vec<Notification>,
}

impl<F: PickedFile> Default for UploadWorkflowController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PickedFile> UploadWorkflowController<F> {
    pub fn new() -> Self {
        Self {
            selection: Vec::new(),
            state: WorkflowState::default(),
            run: RunId::default(),
            phase: Phase::Idle,
            notifications: Vec::new(),
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn selection(&self) -> &[F] {
        &self.selection
    }

    /// The latest run started by [`Self::begin_submit`].
    pub fn run(&self) -> RunId {
        self.run
    }

    pub fn is_downloading(&self) -> bool {
        self.phase == Phase::Downloading
    }

    /// Notifications raised since the last drain, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Append the PDF files of a picker batch to the selection.
    ///
    /// Raises one warning for the whole batch if anything was dropped.
    pub fn select_files(&mut self, files: impl IntoIterator<Item = F>) -> WorkflowResult<SelectionOutcome> {
        if self.phase != Phase::Idle {
            return Err(self.reject(WorkflowError::RunInProgress));
        }

        let mut outcome = SelectionOutcome::default();
        for file in files {
            if file.is_pdf() {
                self.selection.push(file);
                outcome.accepted += 1;
            } else {
                debug!("Ignoring {} ({})", file.name(), file.media_type());
                outcome.rejected += 1;
            }
        }

        if outcome.rejected > 0 {
            warn!("{} non-PDF file(s) ignored", outcome.rejected);
            self.notify(Notification::warning(
                "Invalid File Type",
                "Only PDF files are accepted. Non-PDF files were ignored.",
            ));
        }

        Ok(outcome)
    }

    /// Remove the first selected file called `name`.
    pub fn remove_file(&mut self, name: &str) -> WorkflowResult<Option<F>> {
        if self.phase != Phase::Idle {
            return Err(self.reject(WorkflowError::RunInProgress));
        }

        Ok(self
            .selection
            .iter()
            .position(|file| file.name() == name)
            .map(|index| self.selection.remove(index)))
    }

    // =========================================================================
    // Submit
    // =========================================================================

    /// Start a run for the current selection.
    pub fn begin_submit(&mut self) -> WorkflowResult<Submission<F>> {
        if self.phase != Phase::Idle {
            return Err(self.reject(WorkflowError::RunInProgress));
        }
        if self.selection.is_empty() {
            return Err(self.reject(WorkflowError::NoFilesSelected));
        }

        self.run = self.run.next();
        self.phase = Phase::Processing;
        self.state = WorkflowState {
            processing: true,
            progress: 0,
            status: Some(STATUS_UPLOADING.to_string()),
            error: None,
            artifact_ready: false,
        };

        info!("{}: submitting {} file(s)", self.run, self.selection.len());

        Ok(Submission {
            run: self.run,
            files: self.selection.clone(),
        })
    }

    /// Apply the outcome of the batch request of `run`.
    ///
    /// Returns false when the outcome belongs to a run that is over.
    pub fn complete_submit(&mut self, run: RunId, result: ApiResult<()>) -> bool {
        if run != self.run || self.phase == Phase::Idle {
            debug!("Ignoring batch response of {}", run);
            return false;
        }

        match result {
            Ok(()) => {
                info!("{}: batch accepted", run);
                if self.phase == Phase::Processing && self.state.progress < PREPARATION_THRESHOLD {
                    self.state.status = Some(STATUS_SERVER_PROCESSING.to_string());
                }
            }
            Err(err) => self.fail("Processing Failed", err),
        }
        true
    }

    // =========================================================================
    // Simulated progress
    // =========================================================================

    /// The timer that should be running right now, if any.
    pub fn pending_timer(&self) -> Option<ScheduledTimer> {
        let kind = match self.phase {
            Phase::Idle | Phase::Downloading => return None,
            Phase::Completed => TimerKind::Reset,
            Phase::Processing if self.state.progress < PREPARATION_THRESHOLD => TimerKind::ProgressTick,
            Phase::Processing if !self.state.artifact_ready => TimerKind::Preparation,
            Phase::Processing => return None,
        };

        Some(ScheduledTimer {
            run: self.run,
            kind,
            progress: self.state.progress,
        })
    }

    /// Apply an elapsed timer. Timers that are no longer pending are ignored.
    pub fn fire(&mut self, timer: ScheduledTimer) -> bool {
        if self.pending_timer() != Some(timer) {
            debug!("Ignoring stale {:?} timer of {}", timer.kind, timer.run);
            return false;
        }

        match timer.kind {
            TimerKind::ProgressTick => {
                self.state.progress = (self.state.progress + PROGRESS_STEP).min(PREPARATION_THRESHOLD);
                if self.state.progress == PREPARATION_THRESHOLD {
                    self.state.status = Some(STATUS_PREPARING.to_string());
                }
            }
            TimerKind::Preparation => {
                info!("{}: report ready for download", self.run);
                self.state.artifact_ready = true;
                self.state.progress = READY_PROGRESS;
                self.state.status = Some(STATUS_READY.to_string());
            }
            TimerKind::Reset => {
                debug!("{}: back to idle", self.run);
                self.selection.clear();
                self.state = WorkflowState::default();
                self.phase = Phase::Idle;
            }
        }
        true
    }

    // =========================================================================
    // Download
    // =========================================================================

    /// Start downloading the report of the current run.
    pub fn begin_download(&mut self) -> WorkflowResult<RunId> {
        match self.phase {
            Phase::Downloading => return Err(self.reject(WorkflowError::DownloadInProgress)),
            Phase::Completed => return Err(self.reject(WorkflowError::AlreadyDownloaded)),
            Phase::Processing if self.state.artifact_ready => {}
            _ => return Err(self.reject(WorkflowError::ArtifactNotReady)),
        }

        self.phase = Phase::Downloading;
        self.state.status = Some(STATUS_DOWNLOADING.to_string());
        self.state.progress = DOWNLOADING_PROGRESS;
        Ok(self.run)
    }

    /// Apply the outcome of fetching and saving the report of `run`.
    pub fn complete_download(&mut self, run: RunId, result: ApiResult<()>) -> bool {
        if run != self.run || self.phase != Phase::Downloading {
            debug!("Ignoring download result of {}", run);
            return false;
        }

        match result {
            Ok(()) => {
                info!("{}: report downloaded", run);
                self.phase = Phase::Completed;
                self.state.progress = COMPLETE_PROGRESS;
                self.state.status = Some(STATUS_DOWNLOAD_COMPLETE.to_string());
                self.notify(Notification::success("Download Successful", "Excel report downloaded."));
            }
            Err(err) => self.fail("Download Failed", err),
        }
        true
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn reject(&mut self, err: WorkflowError) -> WorkflowError {
        let notification = match err {
            WorkflowError::NoFilesSelected => Notification::error("No Files Selected", err.to_string()),
            WorkflowError::ArtifactNotReady => Notification::error("File Not Ready", err.to_string()),
            WorkflowError::RunInProgress => Notification::warning("Processing In Progress", err.to_string()),
            WorkflowError::DownloadInProgress => Notification::warning("Download In Progress", err.to_string()),
            WorkflowError::AlreadyDownloaded => Notification::warning("Already Downloaded", err.to_string()),
        };
        self.notify(notification);
        err
    }

    fn fail(&mut self, title: &str, err: ApiError) {
        let message = err.to_string();
        warn!("{}: {}: {}", self.run, title, message);

        self.phase = Phase::Idle;
        self.state = WorkflowState {
            error: Some(message.clone()),
            ..WorkflowState::default()
        };
        self.notify(Notification::error(title, message));
    }
}
