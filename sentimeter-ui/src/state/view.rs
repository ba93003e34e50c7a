//! View State
//!
//! Everything the page renders, held in one plain struct. Components read
//! it through a `RwSignal`; the controller writes it through [`ViewStore`].

use leptos::{create_memo, Memo, RwSignal, SignalUpdate, SignalWith, SignalWithUntracked};
use std::cell::RefCell;
use std::rc::Rc;

use crate::display::{HistoryView, ResultView};

/// Banner auto-hide delay
pub const BANNER_TIMEOUT_MS: u32 = 5000;

/// Visual tone of the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Error,
    Success,
}

impl BannerTone {
    /// Inline style applied to the banner element
    pub fn style(&self) -> &'static str {
        match self {
            BannerTone::Error => "background-color: #fee; color: #dc2626;",
            BannerTone::Success => "background-color: #dcfce7; color: #065f46;",
        }
    }
}

/// Transient message shown above the form
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    /// Identifies this banner for its hide timer
    pub id: u64,
    pub message: String,
    pub tone: BannerTone,
}

/// Page state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Contents of the text field
    pub input: String,
    /// An analyze request is in flight; the trigger is disabled
    pub analyzing: bool,
    /// Last successful analysis
    pub result: Option<ResultView>,
    pub result_visible: bool,
    pub banner: Option<Banner>,
    next_banner_id: u64,
    pub history: HistoryView,
}

impl ViewState {
    /// Replace the banner and return its id
    pub fn show_banner(&mut self, message: impl Into<String>, tone: BannerTone) -> u64 {
        self.next_banner_id += 1;
        let id = self.next_banner_id;
        self.banner = Some(Banner {
            id,
            message: message.into(),
            tone,
        });
        id
    }

    /// Hide the banner if it is still the one identified by `id`
    pub fn dismiss_banner(&mut self, id: u64) {
        if self.banner.as_ref().is_some_and(|b| b.id == id) {
            self.banner = None;
        }
    }

    /// The trigger control accepts clicks
    pub fn analyze_enabled(&self) -> bool {
        !self.analyzing
    }
}

/// Memoized slices of the page state
///
/// Components subscribe to these rather than to the whole signal, so typing
/// in the input does not re-render the result card or the history rows.
#[derive(Clone, Copy)]
pub struct ViewSlices {
    pub input: Memo<String>,
    pub analyzing: Memo<bool>,
    pub result: Memo<Option<ResultView>>,
    pub result_visible: Memo<bool>,
    pub banner: Memo<Option<Banner>>,
    pub history: Memo<HistoryView>,
}

impl ViewSlices {
    pub fn new(state: RwSignal<ViewState>) -> Self {
        Self {
            input: create_memo(move |_| state.with(|v| v.input.clone())),
            analyzing: create_memo(move |_| state.with(|v| v.analyzing)),
            result: create_memo(move |_| state.with(|v| v.result.clone())),
            result_visible: create_memo(move |_| state.with(|v| v.result_visible)),
            banner: create_memo(move |_| state.with(|v| v.banner.clone())),
            history: create_memo(move |_| state.with(|v| v.history.clone())),
        }
    }
}

/// Shared, mutable access to the [`ViewState`]
pub trait ViewStore {
    /// Read the state without subscribing to changes
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;

    /// Mutate the state, notifying observers
    fn write(&self, f: impl FnOnce(&mut ViewState));
}

impl ViewStore for RwSignal<ViewState> {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        SignalWithUntracked::with_untracked(self, f)
    }

    fn write(&self, f: impl FnOnce(&mut ViewState)) {
        SignalUpdate::update(self, f)
    }
}

impl ViewStore for Rc<RefCell<ViewState>> {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.borrow_mut())
    }
}
