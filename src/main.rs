//! Citrea Testnet Stats
//!
//! Single-page dashboard for the Citrea testnet explorer counters,
//! built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It polls the public explorer stats endpoint over HTTP
//! every ten seconds and renders one card per counter.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
