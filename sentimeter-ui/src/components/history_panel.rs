//! History Panel Component
//!
//! Recent analyses with a button to wipe the server-side history.

use leptos::*;

use crate::display::{HistoryRow, HistoryView};
use crate::state::{PageController, ViewSlices};

/// History list
#[component]
pub fn HistoryPanel() -> impl IntoView {
    let ctrl = use_context::<PageController>().expect("PageController not found");
    let history = use_context::<ViewSlices>().expect("ViewSlices not found").history;

    let on_clear_history = move |_| {
        let ctrl = ctrl.clone();
        spawn_local(async move {
            let _ = ctrl.clear_history().await;
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Historique"</h2>
                <button
                    id="clear-history-btn"
                    type="button"
                    on:click=on_clear_history
                    class="px-3 py-1 bg-gray-700 hover:bg-red-600 rounded text-sm transition-colors"
                >
                    "🗑 Effacer l’historique"
                </button>
            </div>

            <div id="history-list" class="space-y-2">
                {move || match history.get() {
                    HistoryView::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <HistoryItem row=row /> })
                        .collect_view(),
                    placeholder => view! {
                        <div class="history-item">
                            <em>{placeholder.placeholder().unwrap_or_default()}</em>
                        </div>
                    }.into_view(),
                }}
            </div>
        </section>
    }
}

#[component]
fn HistoryItem(row: HistoryRow) -> impl IntoView {
    view! {
        <div class="history-item bg-gray-700 rounded-lg px-4 py-2">
            <div class="history-text" title=row.title>{row.excerpt}</div>
            <div class="history-meta flex justify-between text-sm text-gray-400 mt-1">
                <span>{row.emoji}" "{row.label}</span>
                <span class="lang-badge">{row.language}</span>
            </div>
        </div>
    }
}
