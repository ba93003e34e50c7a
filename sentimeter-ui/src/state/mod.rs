//! State Management
//!
//! Page state and the controller that mutates it.

pub mod actions;
pub mod view;

pub use actions::{BrowserConfirm, Controller};
pub use view::{ViewSlices, ViewState};

use leptos::RwSignal;

use crate::api::HttpApi;

/// Controller wired to the browser
pub type PageController = Controller<HttpApi, BrowserConfirm, RwSignal<ViewState>>;
