//! Dashboard State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// A single counter as served by the stats endpoint.
///
/// Values arrive pre-formatted as strings and are rendered verbatim;
/// no numeric parsing or reformatting happens on this side.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Counter {
    /// Opaque identifier, used only as a rendering key.
    pub id: String,
    pub value: String,
    pub title: String,
    /// Unit suffix rendered after the value; absent or `null` means none.
    #[serde(default)]
    pub units: Option<String>,
    pub description: String,
}

/// Fixed user-facing message shown for any failed fetch, whatever the cause.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load data";

/// Current display mode of the dashboard.
///
/// Exactly one variant is active at any time. Transitions are driven
/// solely by fetch outcomes: the initial state is `Loading`, and every
/// completed fetch replaces the state wholesale.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(Vec<Counter>),
}

impl ViewState {
    /// Fold a fetch outcome into the next view state.
    ///
    /// Success replaces any prior list wholesale; failure discards a
    /// prior `Loaded` rather than keeping it stale-but-displayed. An
    /// empty counter list is a normal `Loaded` with zero cards.
    pub fn from_fetch(outcome: Result<Vec<Counter>, String>) -> Self {
        match outcome {
            Ok(counters) => ViewState::Loaded(counters),
            Err(_) => ViewState::Error(FETCH_ERROR_MESSAGE.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The counters to display, when in the loaded state.
    pub fn counters(&self) -> Option<&[Counter]> {
        match self {
            ViewState::Loaded(counters) => Some(counters),
            _ => None,
        }
    }
}

/// Dashboard state provided to all components.
#[derive(Clone)]
pub struct DashboardState {
    /// What the dashboard is currently showing.
    pub view: RwSignal<ViewState>,
    /// Epoch millis of the last successful fetch, for the footer.
    pub last_updated: RwSignal<Option<i64>>,
}

/// Provide dashboard state to the component tree.
pub fn provide_dashboard_state() {
    let state = DashboardState {
        view: create_rw_signal(ViewState::Loading),
        last_updated: create_rw_signal(None),
    };

    provide_context(state);
}

impl DashboardState {
    /// Record a completed fetch.
    ///
    /// Last write wins: whichever response resolves most recently
    /// overwrites the view, regardless of issue order. Writes landing
    /// after the view is torn down are ignored.
    pub fn apply_fetch_outcome(&self, outcome: Result<Vec<Counter>, String>) {
        if outcome.is_ok() {
            self.last_updated
                .try_set(Some(chrono::Utc::now().timestamp_millis()));
        }
        self.view.try_set(ViewState::from_fetch(outcome));
    }
}
