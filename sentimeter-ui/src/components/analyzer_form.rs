//! Analyzer Form Component
//!
//! Text input with the analyze and clear buttons.

use leptos::*;

use crate::components::InlineLoading;
use crate::state::{PageController, ViewSlices};

/// Input form
#[component]
pub fn AnalyzerForm() -> impl IntoView {
    let ctrl = use_context::<PageController>().expect("PageController not found");
    let slices = use_context::<ViewSlices>().expect("ViewSlices not found");
    let state = *ctrl.store();
    let input_ref = create_node_ref::<html::Textarea>();

    let analyzing = slices.analyzing;

    let on_analyze = {
        let ctrl = ctrl.clone();
        move |_| {
            let ctrl = ctrl.clone();
            spawn_local(async move {
                // Outcome is already rendered through the view state
                let _ = ctrl.analyze().await;
            });
        }
    };

    let on_clear = move |_| {
        ctrl.clear();
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
            <textarea
                id="input-text"
                node_ref=input_ref
                rows="5"
                placeholder="Saisissez un texte à analyser..."
                prop:value=move || slices.input.get()
                on:input=move |ev| state.update(|v| v.input = event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />

            <div class="flex space-x-2">
                <button
                    id="analyze-btn"
                    type="button"
                    on:click=on_analyze
                    disabled=move || analyzing.get()
                    class="flex-1 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if analyzing.get() {
                        view! {
                            <InlineLoading />
                            <span>"Analyse..."</span>
                        }.into_view()
                    } else {
                        view! {
                            <span>"🔍 Analyser"</span>
                        }.into_view()
                    }}
                </button>

                <button
                    id="clear-btn"
                    type="button"
                    on:click=on_clear
                    class="px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Effacer"
                </button>
            </div>
        </section>
    }
}
