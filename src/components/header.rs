//! Header Component
//!
//! Page title and the fullscreen toggle.

use leptos::*;

/// Toggle fullscreen on the document root.
///
/// Requests fullscreen when nothing is fullscreen, exits otherwise.
/// Hosts that refuse the request just leave the page as it is.
fn toggle_fullscreen() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if document.fullscreen_element().is_some() {
            document.exit_fullscreen();
        } else if let Some(root) = document.document_element() {
            let _ = root.request_fullscreen();
        }
    }
}

/// Header with the dashboard title and fullscreen button
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="pt-8 pb-2">
            <h1 class="text-4xl font-extrabold mb-8 text-center text-white">
                "Citrea Testnet Stats"
            </h1>

            <div class="text-center mb-6">
                <button
                    on:click=move |_| toggle_fullscreen()
                    class="px-4 py-2 bg-blue-600 text-white font-semibold rounded hover:bg-blue-700 transition-colors"
                >
                    "Toggle Fullscreen"
                </button>
            </div>
        </header>
    }
}
