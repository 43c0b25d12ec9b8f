//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Upload Your Invoices"</h1>
            <p class="subtitle">
                "Select multiple PDF files to extract data and generate an Excel report."
            </p>
        </div>
    }
}
