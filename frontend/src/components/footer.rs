//! Footer component

use leptos::*;

/// Page footer. Points at the processing service this build talks to.
#[component]
pub fn Footer(api_url: String) -> impl IntoView {
    let year = chrono::Local::now().format("%Y").to_string();
    let href = api_url.clone();

    view! {
        <footer>
            <div>
                "Copyright © " {year} " InvoiceBlaze • Powered by "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
            <div class="footer-api">
                "Ensure the processing API is running at: "
                <a href=href class="footer-link" target="_blank" rel="noopener noreferrer">
                    {api_url}
                </a>
            </div>
        </footer>
    }
}
