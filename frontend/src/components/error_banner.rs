use leptos::*;

use crate::state::WorkflowHandle;

/// Inline error of the last failed run, shown until the next run starts.
#[component]
pub fn ErrorBanner(workflow: WorkflowHandle) -> impl IntoView {
    let error = move || workflow.state().error;

    view! {
        <Show when=move || error().is_some() fallback=|| view! {}>
            <div class="error-message" role="alert">
                <span class="error-icon">"⚠️"</span>
                <p>{move || error().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
