//! PDF upload component.
//!
//! Hidden multi-file picker, the list of selected files with per-file
//! removal, and the button that starts a run.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::state::WorkflowHandle;
use crate::types::BrowserFile;

#[component]
pub fn UploadSection(workflow: WorkflowHandle) -> impl IntoView {
    let processing = move || workflow.state().processing;
    let has_files = move || !workflow.selected_names().is_empty();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else {
            return;
        };

        let files: Vec<BrowserFile> = (0..list.length())
            .filter_map(|i| list.get(i))
            .map(BrowserFile::from)
            .collect();
        log::debug!("Picked {} file(s)", files.len());
        workflow.select(files);

        // picking the same file again must fire `change`
        input.set_value("");
    };

    let trigger_file_input = move |_| {
        let input = gloo_utils::document()
            .get_element_by_id("fileInput")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if let Some(input) = input {
            input.click();
        }
    };

    view! {
        <div class="upload-section" id="uploadZone">
            <div class="upload-icon">"📤"</div>

            <input
                type="file"
                id="fileInput"
                accept=".pdf"
                multiple=true
                style="display:none"
                prop:disabled=processing
                on:change=on_file_change
            />

            <button
                class="upload-button"
                on:click=trigger_file_input
                disabled=processing
            >
                "Select PDF Files"
            </button>

            <Show when=has_files fallback=|| view! {}>
                <div class="file-list">
                    <h3 class="file-list-title">
                        {move || format!("Selected Files ({}):", workflow.selected_names().len())}
                    </h3>
                    <ul>
                        <For
                            each=move || workflow.selected_names().into_iter().enumerate()
                            key=|(idx, name)| (*idx, name.clone())
                            children=move |(_, name)| {
                                let target = name.clone();
                                let title = name.clone();
                                view! {
                                    <li class="file-item">
                                        <span class="file-name" title=title>"📄 " {name}</span>
                                        <button
                                            class="file-remove"
                                            title="Remove file"
                                            disabled=processing
                                            on:click=move |_| workflow.remove(&target)
                                        >
                                            "✕"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </Show>

            <Show when=move || has_files() && !processing() fallback=|| view! {}>
                <button class="process-button" on:click=move |_| workflow.submit()>
                    "⚡ Process Invoices"
                </button>
            </Show>
        </div>
    }
}
