//! Counter Card Component
//!
//! Displays a single counter with its value, units, and description.

use leptos::*;

use crate::state::global::Counter;

/// Counter card component
#[component]
pub fn CounterCard(counter: Counter) -> impl IntoView {
    view! {
        <div
            id=counter.id
            class="p-6 bg-gray-800 border border-gray-700 rounded-lg shadow-lg hover:border-gray-600 transition-colors"
        >
            // Counter title
            <h2 class="text-2xl font-bold text-white mb-4">{counter.title}</h2>

            // Value with optional units suffix
            <p class="text-3xl font-semibold text-white mb-2">
                {counter.value}
                {counter.units.map(|units| view! {
                    <span class="text-xl ml-1 text-gray-400">{units}</span>
                })}
            </p>

            <p class="text-gray-400 text-base mt-2">{counter.description}</p>
        </div>
    }
}
