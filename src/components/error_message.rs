//! Error Message Component
//!
//! Fixed fetch-failure notice with the CORS help link.

use leptos::*;

/// Demo page that grants temporary access to the public CORS proxy.
const CORS_HELP_URL: &str = "https://cors-anywhere.herokuapp.com/corsdemo";

/// Error banner shown instead of the counter grid.
///
/// There is no retry button; recovery happens via the next scheduled
/// poll.
#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center mt-4 text-red-400">
            {message}
            ". Please enable CORS access "
            <a
                href=CORS_HELP_URL
                target="_blank"
                rel="noopener noreferrer"
                class="text-blue-400 underline"
            >
                "here"
            </a>
            "."
        </div>
    }
}
