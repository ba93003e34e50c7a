//! App Root Component

use leptos::*;

use crate::api::HttpApi;
use crate::components::{AnalyzerForm, HistoryPanel, ResultCard, Toast};
use crate::state::{BrowserConfirm, Controller, PageController, ViewSlices, ViewState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(ViewState::default());
    let controller: PageController =
        Controller::new(HttpApi::from_storage(), BrowserConfirm, state);
    provide_context(controller.clone());
    provide_context(ViewSlices::new(state));

    // Initial history load
    spawn_local(async move {
        controller.load_history().await;
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <main class="container mx-auto max-w-2xl px-4 py-8 space-y-6">
                <header>
                    <h1 class="text-3xl font-bold">"Analyse de sentiment"</h1>
                    <p class="text-gray-400 mt-1">
                        "Saisissez un texte pour en connaître la tonalité"
                    </p>
                </header>

                <Toast />
                <AnalyzerForm />
                <ResultCard />
                <HistoryPanel />
            </main>
        </div>
    }
}
