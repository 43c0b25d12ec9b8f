//! Reactive wrapper around the workflow controller.
//!
//! All components share one [`WorkflowHandle`]. Every mutation goes through
//! [`WorkflowHandle::apply`], which moves the controller's notifications
//! into the toast queue right after the change.

use gloo_timers::callback::Timeout;
use invoiceblaze_workflow::{
    BatchApi, Notification, PickedFile, UploadWorkflowController, WorkflowState, WorkflowTiming,
};
use leptos::*;

use crate::config::TOAST_DURATION_MS;
use crate::services::{save_artifact, HttpBatchApi};
use crate::types::{BrowserFile, ToastQueue};

pub type Controller = UploadWorkflowController<BrowserFile>;

/// Shared, `Copy` handle on the page state.
#[derive(Clone, Copy)]
pub struct WorkflowHandle {
    controller: RwSignal<Controller>,
    toasts: RwSignal<ToastQueue>,
    state: Memo<WorkflowState>,
    api: StoredValue<HttpBatchApi>,
}

impl WorkflowHandle {
    pub fn new(api: HttpBatchApi) -> Self {
        let controller = create_rw_signal(Controller::new());
        let state = create_memo(move |_| controller.with(|c| c.state().clone()));

        Self {
            controller,
            toasts: create_rw_signal(ToastQueue::default()),
            state,
            api: store_value(api),
        }
    }

    /// Current workflow state (tracked).
    pub fn state(&self) -> WorkflowState {
        self.state.get()
    }

    /// Names of the selected files, in order (tracked).
    pub fn selected_names(&self) -> Vec<String> {
        self.controller.with(|c| c.selection().iter().map(|f| f.name()).collect())
    }

    pub fn is_downloading(&self) -> bool {
        self.controller.with(|c| c.is_downloading())
    }

    pub fn toasts(&self) -> RwSignal<ToastQueue> {
        self.toasts
    }

    pub fn api_url(&self) -> String {
        self.api.with_value(|api| api.base_url().to_string())
    }

    /// Mutate the controller, then surface its notifications as toasts.
    ///
    /// Returns `None` once the owning scope is disposed.
    pub fn apply<T>(&self, f: impl FnOnce(&mut Controller) -> T) -> Option<T> {
        let (out, notifications) = self.controller.try_update(|c| {
            let out = f(c);
            (out, c.drain_notifications())
        })?;

        for notification in notifications {
            self.show(notification);
        }
        Some(out)
    }

    fn show(&self, notification: Notification) {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        log::info!("{}", notification);

        let Some(id) = self.toasts.try_update(|q| q.push(notification, timestamp)) else {
            return;
        };
        let toasts = self.toasts;
        Timeout::new(TOAST_DURATION_MS, move || {
            toasts.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    /// Add picker files to the selection.
    pub fn select(&self, files: Vec<BrowserFile>) {
        match self.apply(|c| c.select_files(files)) {
            Some(Ok(outcome)) => log::debug!("Selected {} file(s), ignored {}", outcome.accepted, outcome.rejected),
            Some(Err(err)) => log::debug!("Selection rejected: {}", err),
            None => {}
        }
    }

    pub fn remove(&self, name: &str) {
        match self.apply(|c| c.remove_file(name)) {
            Some(Ok(None)) => log::debug!("{} was not selected", name),
            Some(Err(err)) => log::debug!("Removal rejected: {}", err),
            _ => {}
        }
    }

    /// Start a run and send the batch in the background.
    pub fn submit(&self) {
        let Some(Ok(submission)) = self.apply(|c| c.begin_submit()) else {
            return;
        };
        let api = self.api.get_value();
        let handle = *self;

        spawn_local(async move {
            let result = api.process_batch(&submission.files).await;
            handle.apply(|c| c.complete_submit(submission.run, result));
        });
    }

    /// Fetch the report and hand it to the browser.
    pub fn download(&self) {
        let Some(Ok(run)) = self.apply(|c| c.begin_download()) else {
            return;
        };
        let api = self.api.get_value();
        let handle = *self;

        spawn_local(async move {
            let result = match api.download_artifact().await {
                Ok(artifact) => save_artifact(&artifact),
                Err(err) => Err(err),
            };
            handle.apply(|c| c.complete_download(run, result));
        });
    }

    /// Keep exactly one browser timer armed for the controller's pending timer.
    ///
    /// Must be called once, inside the component that owns the handle.
    pub fn drive_timers(&self, timing: WorkflowTiming) {
        let controller = self.controller;
        let pending = create_memo(move |_| controller.with(|c| c.pending_timer()));
        let armed = store_value(None::<Timeout>);
        let handle = *self;

        create_effect(move |_| {
            let next = pending.get().map(|timer| {
                let millis = u32::try_from(timer.delay(&timing).as_millis()).unwrap_or(u32::MAX);
                Timeout::new(millis, move || {
                    // the effect replaces this Timeout as soon as the state changes
                    spawn_local(async move {
                        handle.apply(|c| c.fire(timer));
                    });
                })
            });
            // dropping the previous Timeout cancels it
            armed.set_value(next);
        });

        on_cleanup(move || {
            armed.try_update_value(Option::take);
        });
    }
}
