//! Transient notifications, stacked in a corner of the page.
//!
//! Each toast dismisses itself after a few seconds (see
//! [`WorkflowHandle`](crate::state::WorkflowHandle)) or on click.

use leptos::*;

use crate::types::ToastQueue;

#[component]
pub fn Toasts(toasts: RwSignal<ToastQueue>) -> impl IntoView {
    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=move || toasts.with(|q| q.entries().to_vec())
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let level = entry.notification.level;

                    view! {
                        <div
                            class=format!("toast {}", level.css_class())
                            on:click=move |_| toasts.update(|q| q.dismiss(id))
                        >
                            <div class="toast-title">
                                {level.emoji()} " " {entry.notification.title.clone()}
                                <span class="toast-time">{entry.timestamp.clone()}</span>
                            </div>
                            <div class="toast-description">{entry.notification.description.clone()}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
