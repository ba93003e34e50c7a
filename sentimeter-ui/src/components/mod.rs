//! UI Components
//!
//! Leptos components for the single analysis page.

pub mod analyzer_form;
pub mod history_panel;
pub mod loading;
pub mod result_card;
pub mod toast;

pub use analyzer_form::AnalyzerForm;
pub use history_panel::HistoryPanel;
pub use loading::InlineLoading;
pub use result_card::ResultCard;
pub use toast::Toast;
