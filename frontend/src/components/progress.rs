use invoiceblaze_workflow::READY_PROGRESS;
use leptos::*;

use crate::state::WorkflowHandle;

/// Progress bar and status line of the running batch, plus the report
/// download button once the report is ready.
#[component]
pub fn ProgressSection(workflow: WorkflowHandle) -> impl IntoView {
    let processing = move || workflow.state().processing;
    let progress = move || workflow.state().progress;
    let ready = move || workflow.state().artifact_ready;
    let download_disabled = move || progress() < READY_PROGRESS || workflow.is_downloading();

    view! {
        <Show when=processing fallback=|| view! {}>
            <div class="progress-section show" id="progressSection">
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        id="progressFill"
                        style=move || format!("width: {}%;", progress())
                    ></div>
                </div>
                <div class="progress-label">{move || format!("{}%", progress())}</div>
                {move || {
                    workflow
                        .state()
                        .status
                        .map(|status| view! { <p class="progress-status">{status}</p> })
                }}

                <Show when=ready fallback=|| view! {}>
                    <button
                        class="download-button"
                        disabled=download_disabled
                        on:click=move |_| workflow.download()
                    >
                        "📥 Download Excel Report"
                    </button>
                </Show>
            </div>
        </Show>
    }
}
