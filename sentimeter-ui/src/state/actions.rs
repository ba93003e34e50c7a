//! User Actions
//!
//! The controller behind the page: analyze, clear, load history and clear
//! history. It owns no state of its own; every outcome is written to the
//! [`ViewStore`] it was built with.

use leptos::logging::warn;

use crate::api::{AnalysisResult, ClientError, SentimentApi};
use crate::display::{HistoryView, ResultView};
use crate::state::view::{BannerTone, ViewStore};

pub const EMPTY_INPUT: &str = "Veuillez saisir du texte.";

pub const CONFIRM_CLEAR_HISTORY: &str =
    "Voulez-vous vraiment supprimer tout l’historique ? Cette action est irréversible.";

/// Shown when the server confirms a clear without a message
const HISTORY_CLEARED: &str = "Historique effacé.";

/// Why an analyze action did not produce a result
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeError {
    /// Nothing to analyze; no request was sent
    EmptyInput,
    Api(ClientError),
}

/// Outcome of the clear-history action
#[derive(Debug, Clone, PartialEq)]
pub enum ClearOutcome {
    /// The user declined the confirmation; no request was sent
    Cancelled,
    Cleared,
    Failed(ClientError),
}

/// Interactive yes/no prompt
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Browser `window.confirm` dialog
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Disables the analyze trigger for as long as it lives
struct AnalyzeBusy<'a, S: ViewStore> {
    store: &'a S,
}

impl<'a, S: ViewStore> AnalyzeBusy<'a, S> {
    fn begin(store: &'a S) -> Self {
        store.write(|v| v.analyzing = true);
        Self { store }
    }
}

impl<S: ViewStore> Drop for AnalyzeBusy<'_, S> {
    fn drop(&mut self) {
        self.store.write(|v| v.analyzing = false);
    }
}

/// Page controller
#[derive(Clone)]
pub struct Controller<A, C, S> {
    api: A,
    confirm: C,
    store: S,
}

impl<A, C, S> Controller<A, C, S>
where
    A: SentimentApi,
    C: Confirm,
    S: ViewStore,
{
    pub fn new(api: A, confirm: C, store: S) -> Self {
        Self {
            api,
            confirm,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Analyze the current input, then reload the history on success
    pub async fn analyze(&self) -> Result<AnalysisResult, AnalyzeError> {
        let text = self.store.read(|v| v.input.trim().to_string());
        if text.is_empty() {
            self.banner(EMPTY_INPUT, BannerTone::Error);
            return Err(AnalyzeError::EmptyInput);
        }

        let result = self.submit(&text).await?;

        // History failures are reported by the loader itself
        self.load_history().await;

        Ok(result)
    }

    async fn submit(&self, text: &str) -> Result<AnalysisResult, AnalyzeError> {
        let _busy = AnalyzeBusy::begin(&self.store);

        match self.api.analyze(text).await {
            Ok(result) => {
                let view = ResultView::from(&result);
                self.store.write(|v| {
                    v.result = Some(view);
                    v.result_visible = true;
                });
                Ok(result)
            }
            Err(e) => {
                self.banner(format!("Erreur : {}", e.user_message()), BannerTone::Error);
                Err(AnalyzeError::Api(e))
            }
        }
    }

    fn banner(&self, message: impl Into<String>, tone: BannerTone) {
        self.store.write(|v| {
            v.show_banner(message, tone);
        });
    }

    /// Empty the input and hide the result panel
    pub fn clear(&self) {
        self.store.write(|v| {
            v.input.clear();
            v.result_visible = false;
        });
    }

    /// Fetch the history and render it; failures degrade to a placeholder
    pub async fn load_history(&self) {
        let view = match self.api.fetch_history().await {
            Ok(entries) => HistoryView::from_entries(&entries),
            Err(e) => {
                warn!("Impossible de charger l’historique: {}", e);
                HistoryView::Unavailable
            }
        };

        self.store.write(|v| v.history = view);
    }

    /// Ask for confirmation, then delete the whole history
    pub async fn clear_history(&self) -> ClearOutcome {
        if !self.confirm.confirm(CONFIRM_CLEAR_HISTORY) {
            return ClearOutcome::Cancelled;
        }

        match self.api.clear_history().await {
            Ok(message) => {
                self.load_history().await;
                let message = message.unwrap_or_else(|| HISTORY_CLEARED.to_string());
                self.banner(message, BannerTone::Success);
                ClearOutcome::Cleared
            }
            Err(e) => {
                let message = format!("Erreur lors de la suppression : {}", e.user_message());
                self.banner(message, BannerTone::Error);
                ClearOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HistoryEntry;
    use crate::display::HISTORY_VISIBLE;
    use crate::state::view::ViewState;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Store = Rc<RefCell<ViewState>>;

    /// Scripted API recording every call
    #[derive(Default)]
    struct FakeApi {
        analyze_response: RefCell<Option<Result<AnalysisResult, ClientError>>>,
        history_response: RefCell<Option<Result<Vec<HistoryEntry>, ClientError>>>,
        clear_response: RefCell<Option<Result<Option<String>, ClientError>>>,
        analyzed: RefCell<Vec<String>>,
        history_calls: Cell<usize>,
        clear_calls: Cell<usize>,
        /// Store observed while a request is in flight
        observed: RefCell<Option<Store>>,
        busy_during_request: Cell<bool>,
    }

    #[async_trait(?Send)]
    impl SentimentApi for FakeApi {
        async fn analyze(&self, text: &str) -> Result<AnalysisResult, ClientError> {
            self.analyzed.borrow_mut().push(text.to_string());
            if let Some(store) = self.observed.borrow().as_ref() {
                self.busy_during_request.set(store.borrow().analyzing);
            }
            self.analyze_response
                .borrow_mut()
                .take()
                .expect("unexpected analyze call")
        }

        async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
            self.history_calls.set(self.history_calls.get() + 1);
            self.history_response
                .borrow()
                .clone()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn clear_history(&self) -> Result<Option<String>, ClientError> {
            self.clear_calls.set(self.clear_calls.get() + 1);
            self.clear_response
                .borrow_mut()
                .take()
                .expect("unexpected clear call")
        }
    }

    struct FixedConfirm(bool);

    impl Confirm for FixedConfirm {
        fn confirm(&self, _message: &str) -> bool {
            self.0
        }
    }

    fn controller(api: FakeApi, confirm: bool) -> Controller<FakeApi, FixedConfirm, Store> {
        let store = Rc::new(RefCell::new(ViewState::default()));
        *api.observed.borrow_mut() = Some(Rc::clone(&store));
        Controller::new(api, FixedConfirm(confirm), store)
    }

    fn entry(text: &str) -> HistoryEntry {
        HistoryEntry {
            text: Some(text.to_string()),
            label: Some("neutral".to_string()),
            language: Some("fra".to_string()),
            ..Default::default()
        }
    }

    fn banner(ctrl: &Controller<FakeApi, FixedConfirm, Store>) -> Option<(String, BannerTone)> {
        ctrl.store()
            .read(|v| v.banner.as_ref().map(|b| (b.message.clone(), b.tone)))
    }

    fn server_error(message: &str) -> ClientError {
        ClientError::Server {
            status: 500,
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn test_blank_input_sends_nothing() {
        for input in ["", "   ", "\n\t "] {
            let ctrl = controller(FakeApi::default(), true);
            ctrl.store().write(|v| v.input = input.to_string());

            let result = block_on(ctrl.analyze());

            assert_eq!(result, Err(AnalyzeError::EmptyInput));
            assert!(ctrl.api.analyzed.borrow().is_empty());
            assert_eq!(ctrl.api.history_calls.get(), 0);
            assert_eq!(banner(&ctrl), Some((EMPTY_INPUT.to_string(), BannerTone::Error)));
        }
    }

    #[test]
    fn test_analyze_success() {
        let api = FakeApi::default();
        *api.analyze_response.borrow_mut() = Some(Ok(AnalysisResult {
            label: "positive".to_string(),
            score: 0.877,
            language: Some("undetermined".to_string()),
        }));
        let ctrl = controller(api, true);
        ctrl.store().write(|v| v.input = "  J'adore ce restaurant  ".to_string());

        let result = block_on(ctrl.analyze()).unwrap();

        assert_eq!(result.label, "positive");
        assert_eq!(*ctrl.api.analyzed.borrow(), vec!["J'adore ce restaurant"]);
        assert!(ctrl.api.busy_during_request.get());

        ctrl.store().read(|v| {
            assert!(v.analyze_enabled());
            assert!(v.result_visible);
            let view = v.result.as_ref().unwrap();
            assert_eq!(view.label, "Positive");
            assert_eq!(view.emoji, "😊");
            assert_eq!(view.confidence, "Confiance : 87.7%");
            assert_eq!(view.language, "Langue détectée : inconnue");
            assert!(v.banner.is_none());
        });
        assert_eq!(ctrl.api.history_calls.get(), 1);
    }

    #[test]
    fn test_analyze_server_error_keeps_stale_result() {
        let api = FakeApi::default();
        *api.analyze_response.borrow_mut() = Some(Err(server_error("boom")));
        let ctrl = controller(api, true);

        let stale = ResultView::from(&AnalysisResult {
            label: "neutral".to_string(),
            score: 0.5,
            language: None,
        });
        ctrl.store().write(|v| {
            v.input = "Quel désastre".to_string();
            v.result = Some(stale.clone());
        });

        let result = block_on(ctrl.analyze());

        assert!(matches!(result, Err(AnalyzeError::Api(_))));
        assert_eq!(banner(&ctrl), Some(("Erreur : boom".to_string(), BannerTone::Error)));
        ctrl.store().read(|v| {
            assert!(v.analyze_enabled());
            assert!(!v.result_visible);
            assert_eq!(v.result.as_ref(), Some(&stale));
        });
        assert_eq!(ctrl.api.history_calls.get(), 0);
    }

    #[test]
    fn test_analyze_network_error_reenables_control() {
        let api = FakeApi::default();
        *api.analyze_response.borrow_mut() =
            Some(Err(ClientError::Network("Failed to fetch".to_string())));
        let ctrl = controller(api, true);
        ctrl.store().write(|v| v.input = "Bonjour tout le monde".to_string());

        let _ = block_on(ctrl.analyze());

        assert!(ctrl.store().read(|v| v.analyze_enabled()));
        let (message, _) = banner(&ctrl).unwrap();
        assert_eq!(message, format!("Erreur : {}", crate::api::NETWORK_ERROR));
    }

    #[test]
    fn test_history_failure_after_analyze_keeps_result() {
        let api = FakeApi::default();
        *api.analyze_response.borrow_mut() = Some(Ok(AnalysisResult {
            label: "negative".to_string(),
            score: 0.6,
            language: Some("eng".to_string()),
        }));
        *api.history_response.borrow_mut() =
            Some(Err(ClientError::Network("offline".to_string())));
        let ctrl = controller(api, true);
        ctrl.store().write(|v| v.input = "This is awful".to_string());

        assert!(block_on(ctrl.analyze()).is_ok());

        ctrl.store().read(|v| {
            assert!(v.result_visible);
            assert_eq!(v.history, HistoryView::Unavailable);
            assert!(v.banner.is_none());
        });
    }

    #[test]
    fn test_clear_resets_input_and_hides_result() {
        let ctrl = controller(FakeApi::default(), true);
        ctrl.store().write(|v| {
            v.input = "quelque chose".to_string();
            v.result_visible = true;
        });

        ctrl.clear();

        ctrl.store().read(|v| {
            assert!(v.input.is_empty());
            assert!(!v.result_visible);
        });
        assert_eq!(ctrl.api.history_calls.get(), 0);
    }

    #[test]
    fn test_load_history_shows_last_twenty_reversed() {
        let api = FakeApi::default();
        let entries: Vec<_> = (0..25).map(|i| entry(&format!("texte {}", i))).collect();
        *api.history_response.borrow_mut() = Some(Ok(entries));
        let ctrl = controller(api, true);

        block_on(ctrl.load_history());

        let rows = ctrl.store().read(|v| match &v.history {
            HistoryView::Rows(rows) => rows.clone(),
            other => panic!("unexpected history view {:?}", other),
        });
        assert_eq!(rows.len(), HISTORY_VISIBLE);
        assert_eq!(rows[0].title, "texte 24");
        assert_eq!(rows[19].title, "texte 5");
    }

    #[test]
    fn test_load_history_empty_placeholder() {
        let ctrl = controller(FakeApi::default(), true);

        block_on(ctrl.load_history());

        let placeholder = ctrl.store().read(|v| v.history.placeholder());
        assert_eq!(placeholder, Some("Aucun historique"));
    }

    #[test]
    fn test_load_history_failure_is_silent() {
        let api = FakeApi::default();
        *api.history_response.borrow_mut() = Some(Err(ClientError::Decode("<html>".to_string())));
        let ctrl = controller(api, true);

        block_on(ctrl.load_history());

        ctrl.store().read(|v| {
            assert_eq!(v.history.placeholder(), Some("Historique indisponible"));
            assert!(v.banner.is_none());
        });
    }

    #[test]
    fn test_clear_history_declined() {
        let ctrl = controller(FakeApi::default(), false);

        let outcome = block_on(ctrl.clear_history());

        assert_eq!(outcome, ClearOutcome::Cancelled);
        assert_eq!(ctrl.api.clear_calls.get(), 0);
        assert_eq!(ctrl.api.history_calls.get(), 0);
        assert!(banner(&ctrl).is_none());
    }

    #[test]
    fn test_clear_history_confirmed() {
        let api = FakeApi::default();
        *api.clear_response.borrow_mut() = Some(Ok(Some("Historique effacé.".to_string())));
        let ctrl = controller(api, true);
        ctrl.store()
            .write(|v| v.history = HistoryView::from_entries(&[entry("ancien")]));

        let outcome = block_on(ctrl.clear_history());

        assert_eq!(outcome, ClearOutcome::Cleared);
        assert_eq!(ctrl.api.clear_calls.get(), 1);
        assert_eq!(ctrl.api.history_calls.get(), 1);
        assert_eq!(
            ctrl.store().read(|v| v.history.placeholder()),
            Some("Aucun historique")
        );
        assert_eq!(
            banner(&ctrl),
            Some(("Historique effacé.".to_string(), BannerTone::Success))
        );
    }

    #[test]
    fn test_clear_history_failure() {
        let api = FakeApi::default();
        *api.clear_response.borrow_mut() = Some(Err(server_error("disque plein")));
        let ctrl = controller(api, true);

        let outcome = block_on(ctrl.clear_history());

        assert!(matches!(outcome, ClearOutcome::Failed(_)));
        assert_eq!(ctrl.api.history_calls.get(), 0);
        assert_eq!(
            banner(&ctrl),
            Some((
                "Erreur lors de la suppression : disque plein".to_string(),
                BannerTone::Error
            ))
        );
    }

    #[test]
    fn test_error_banner_after_success_banner_uses_error_tone() {
        let api = FakeApi::default();
        *api.clear_response.borrow_mut() = Some(Ok(None));
        let ctrl = controller(api, true);

        block_on(ctrl.clear_history());
        assert_eq!(banner(&ctrl).unwrap().1, BannerTone::Success);

        block_on(ctrl.analyze()).unwrap_err();
        assert_eq!(banner(&ctrl), Some((EMPTY_INPUT.to_string(), BannerTone::Error)));
    }
}
