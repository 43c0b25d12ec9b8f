//! Drives the upload workflow from a single tokio task.
//!
//! The in-flight request and the simulated progress timer run concurrently
//! through `tokio::select!`, so progress keeps moving while the server works.
//! The controller is only touched from this task.

use std::path::Path;

use invoiceblaze_workflow::{
    BatchApi, Notification, PickedFile, ScheduledTimer, UploadWorkflowController, WorkflowState,
    WorkflowTiming,
};
use tokio::time::Instant;

use crate::error::CliResult;
use crate::files::save_artifact;

/// Receives what a user would see.
pub trait Reporter {
    /// Called after every state change.
    fn state(&mut self, state: &WorkflowState);

    /// Called for every notification, in order.
    fn notification(&mut self, notification: &Notification);
}

/// Prints progress lines and notifications to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    last: Option<WorkflowState>,
}

impl Reporter for ConsoleReporter {
    fn state(&mut self, state: &WorkflowState) {
        if self.last.as_ref() == Some(state) {
            return;
        }
        if state.processing {
            eprintln!(
                "   ⏳ [{:>3}%] {}",
                state.progress,
                state.status.as_deref().unwrap_or_default()
            );
        }
        self.last = Some(state.clone());
    }

    fn notification(&mut self, notification: &Notification) {
        eprintln!("{}", notification);
    }
}

/// Hand pending notifications and the current state to the reporter.
fn sync<F: PickedFile, R: Reporter>(controller: &mut UploadWorkflowController<F>, reporter: &mut R) {
    for notification in controller.drain_notifications() {
        reporter.notification(&notification);
    }
    reporter.state(controller.state());
}

/// Fire every pending timer until none is left.
async fn run_timers<F: PickedFile, R: Reporter>(
    controller: &mut UploadWorkflowController<F>,
    timing: &WorkflowTiming,
    reporter: &mut R,
) {
    while let Some(timer) = controller.pending_timer() {
        tokio::time::sleep(timer.delay(timing)).await;
        controller.fire(timer);
        sync(controller, reporter);
    }
}

/// Submit the current selection and wait until the report is ready.
///
/// Returns once the batch was accepted and the preparation delay elapsed.
pub async fn submit_batch<A, R>(
    controller: &mut UploadWorkflowController<A::File>,
    api: &A,
    timing: &WorkflowTiming,
    reporter: &mut R,
) -> CliResult<()>
where
    A: BatchApi,
    R: Reporter,
{
    let submission = match controller.begin_submit() {
        Ok(submission) => submission,
        Err(err) => {
            sync(controller, reporter);
            return Err(err.into());
        }
    };
    sync(controller, reporter);

    let request = api.process_batch(&submission.files);
    tokio::pin!(request);
    let mut accepted = false;
    // deadline of the pending timer, kept while the timer stays the same
    let mut armed: Option<(ScheduledTimer, Instant)> = None;

    loop {
        let timer = controller.pending_timer();
        if accepted && timer.is_none() {
            break;
        }
        armed = match (timer, armed) {
            (Some(timer), Some((current, deadline))) if current == timer => Some((current, deadline)),
            (Some(timer), _) => Some((timer, Instant::now() + timer.delay(timing))),
            (None, _) => None,
        };
        let deadline = armed.map_or_else(Instant::now, |(_, deadline)| deadline);

        tokio::select! {
            result = &mut request, if !accepted => {
                let failure = result.as_ref().err().cloned();
                controller.complete_submit(submission.run, result);
                sync(controller, reporter);
                if let Some(err) = failure {
                    return Err(err.into());
                }
                accepted = true;
            }
            _ = tokio::time::sleep_until(deadline), if armed.is_some() => {
                if let Some((timer, _)) = armed {
                    controller.fire(timer);
                    sync(controller, reporter);
                }
            }
        }
    }

    Ok(())
}

/// Download the ready report to `output`, then wait for the reset.
pub async fn download_report<A, R>(
    controller: &mut UploadWorkflowController<A::File>,
    api: &A,
    timing: &WorkflowTiming,
    output: &Path,
    reporter: &mut R,
) -> CliResult<()>
where
    A: BatchApi,
    R: Reporter,
{
    let run = match controller.begin_download() {
        Ok(run) => run,
        Err(err) => {
            sync(controller, reporter);
            return Err(err.into());
        }
    };
    sync(controller, reporter);

    let result = match api.download_artifact().await {
        Ok(artifact) => save_artifact(output, &artifact).await,
        Err(err) => Err(err),
    };
    let failure = result.as_ref().err().cloned();

    controller.complete_download(run, result);
    sync(controller, reporter);
    if let Some(err) = failure {
        return Err(err.into());
    }

    run_timers(controller, timing, reporter).await;
    Ok(())
}

/// Full run: select → submit → ready → download → reset.
pub async fn process<A, R>(
    controller: &mut UploadWorkflowController<A::File>,
    api: &A,
    files: Vec<A::File>,
    timing: &WorkflowTiming,
    output: &Path,
    reporter: &mut R,
) -> CliResult<()>
where
    A: BatchApi,
    R: Reporter,
{
    let selected = controller.select_files(files);
    sync(controller, reporter);
    selected?;

    submit_batch(controller, api, timing, reporter).await?;
    download_report(controller, api, timing, output, reporter).await
}
