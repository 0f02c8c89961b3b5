//! Polling Loop
//!
//! Re-fetches the counters on a fixed cadence for the lifetime of the
//! mounted view.

use gloo_timers::callback::Interval;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::state::global::DashboardState;

/// Milliseconds between polls.
pub const POLL_INTERVAL_MS: u32 = 10_000;

/// Start polling the stats endpoint: once immediately, then every
/// [`POLL_INTERVAL_MS`] until the owning view is torn down.
///
/// Ticks fire unconditionally, with no pause on error and no overlap
/// guard, so a slow fetch can leave two requests in flight; whichever
/// resolves last overwrites the view. Dropping the interval on cleanup
/// stops future ticks but does not abort an in-flight request; a late
/// response lands on disposed signals and is ignored.
pub fn start_polling(state: DashboardState) {
    refresh(state.clone());

    let tick_state = state.clone();
    let interval = Interval::new(POLL_INTERVAL_MS, move || {
        refresh(tick_state.clone());
    });

    on_cleanup(move || drop(interval));
}

/// Fire one fetch and fold its outcome into the view state.
fn refresh(state: DashboardState) {
    spawn_local(async move {
        let outcome = api::fetch_counters().await;

        if let Err(cause) = &outcome {
            web_sys::console::error_1(&format!("Failed to fetch counters: {}", cause).into());
        }

        state.apply_fetch_outcome(outcome);
    });
}
