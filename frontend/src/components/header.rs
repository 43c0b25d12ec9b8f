use leptos::*;

use crate::config::APP_NAME;
use crate::state::WorkflowHandle;

#[component]
pub fn Header(workflow: WorkflowHandle) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"🔥 " {APP_NAME}</a>
                <span class="badge">"Ignite Your Invoice Processing"</span>
            </div>
            <div class="header-right">
                <div class="run-status" class:active=move || workflow.state().processing>
                    <span class="run-dot" class:active=move || workflow.state().processing></span>
                    <span>
                        {move || if workflow.state().processing { "Processing" } else { "Idle" }}
                    </span>
                </div>
            </div>
        </header>
    }
}
