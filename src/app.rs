//! App Root Component
//!
//! Main application component wiring state, polling, and the three view
//! states together.

use leptos::*;

use crate::components::{CounterCard, ErrorMessage, Header, Loading};
use crate::state::global::{provide_dashboard_state, Counter, DashboardState, ViewState};
use crate::state::polling::start_polling;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    provide_dashboard_state();

    // Start the ten-second polling loop, bound to this view's lifetime
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    start_polling(state.clone());

    let view_state = state.view;

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header />

            // Main content area: exactly one of the three view states
            <main class="flex-1 max-w-6xl w-full mx-auto px-6 pb-24">
                {move || match view_state.get() {
                    ViewState::Loading => view! { <Loading /> }.into_view(),
                    ViewState::Error(message) => {
                        view! { <ErrorMessage message=message /> }.into_view()
                    }
                    ViewState::Loaded(counters) => {
                        view! { <CounterGrid counters=counters /> }.into_view()
                    }
                }}
            </main>

            <Footer />
        </div>
    }
}

/// The loaded-state grid: one card per counter, in response order.
#[component]
fn CounterGrid(counters: Vec<Counter>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">
            {counters
                .into_iter()
                .map(|counter| view! { <CounterCard counter=counter /> })
                .collect_view()}
        </div>
    }
}

/// Footer showing when the counters were last refreshed
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="max-w-6xl mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || {
                        state.last_updated.get()
                            .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                            .map(|dt| format!("Last updated: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not yet updated".to_string())
                    }}
                </div>

                <div class="text-gray-500">"Refreshes every 10 seconds"</div>
            </div>
        </footer>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_grid(counters: Vec<Counter>) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&container).unwrap();

        leptos::mount_to(container.clone().unchecked_into(), move || {
            view! { <CounterGrid counters=counters /> }
        });

        container
    }

    #[wasm_bindgen_test]
    fn empty_response_renders_zero_cards() {
        let container = mount_grid(Vec::new());
        assert!(container.query_selector("h2").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn cards_appear_in_list_order() {
        let counters = vec![
            Counter {
                id: "z".to_string(),
                value: "3".to_string(),
                title: "Zulu".to_string(),
                units: None,
                description: String::new(),
            },
            Counter {
                id: "a".to_string(),
                value: "1".to_string(),
                title: "Alpha".to_string(),
                units: None,
                description: String::new(),
            },
        ];

        let container = mount_grid(counters);
        let text = container.text_content().unwrap_or_default();
        let zulu = text.find("Zulu").expect("Zulu rendered");
        let alpha = text.find("Alpha").expect("Alpha rendered");
        assert!(zulu < alpha, "cards keep response order");
    }
}
