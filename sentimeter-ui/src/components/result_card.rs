//! Result Card Component

use leptos::*;

use crate::state::ViewSlices;

/// Last analysis result, hidden until the first success
#[component]
pub fn ResultCard() -> impl IntoView {
    let slices = use_context::<ViewSlices>().expect("ViewSlices not found");

    view! {
        <section
            id="result-card"
            class="result-card bg-gray-800 rounded-xl p-6 text-center"
            class:show=move || slices.result_visible.get()
        >
            {move || slices.result.get().map(|result| view! {
                <div id="sentiment-emoji" class="text-5xl">{result.emoji}</div>
                <div id="sentiment-label" class="text-2xl font-bold mt-2">{result.label}</div>
                <div id="sentiment-score" class="text-gray-300 mt-1">{result.confidence}</div>
                <div id="language-info" class="text-sm text-gray-400 mt-1">{result.language}</div>
            })}
        </section>
    }
}
