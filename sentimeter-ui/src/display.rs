//! Display Formatting
//!
//! Pure projections of API data into the strings the page renders.

use crate::api::{AnalysisResult, HistoryEntry};

/// Number of history rows rendered
pub const HISTORY_VISIBLE: usize = 20;

/// Characters of history text shown before the ellipsis
pub const HISTORY_EXCERPT_CHARS: usize = 50;

const UNDETERMINED: &str = "undetermined";

/// Emoji for a sentiment label
pub fn emoji(label: &str) -> &'static str {
    match label {
        "very positive" | "positive" => "😊",
        "very negative" | "negative" => "😞",
        "neutral" => "😐",
        _ => "🤔",
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `0.875` → `87.5`, ties rounded away from zero
pub fn percent(score: f64) -> String {
    let tenths = (score * 100.0 * 10.0).round();
    format!("{:.1}", tenths / 10.0)
}

/// Language shown in the result panel
pub fn language_name(language: Option<&str>) -> &str {
    match language {
        None | Some("") | Some(UNDETERMINED) => "inconnue",
        Some(code) => code,
    }
}

/// Language badge shown on a history row
pub fn language_badge(language: Option<&str>) -> String {
    match language {
        None | Some("") | Some(UNDETERMINED) => "??".to_string(),
        Some(code) => code.to_uppercase(),
    }
}

/// Cut `text` to [`HISTORY_EXCERPT_CHARS`] characters, marking the cut with `…`
pub fn excerpt(text: &str) -> String {
    if text.chars().count() > HISTORY_EXCERPT_CHARS {
        let head: String = text.chars().take(HISTORY_EXCERPT_CHARS).collect();
        format!("{}…", head)
    } else {
        text.to_string()
    }
}

/// Rendered result panel
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub emoji: &'static str,
    pub label: String,
    pub confidence: String,
    pub language: String,
}

impl From<&AnalysisResult> for ResultView {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            emoji: emoji(&result.label),
            label: capitalize(&result.label),
            confidence: format!("Confiance : {}%", percent(result.score)),
            language: format!(
                "Langue détectée : {}",
                language_name(result.language.as_deref())
            ),
        }
    }
}

/// One rendered history row
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    /// Full display text, used as the tooltip
    pub title: String,
    /// Quoted, possibly truncated text
    pub excerpt: String,
    pub emoji: &'static str,
    pub label: String,
    pub language: String,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        let text = entry.display_text();
        let label = entry.label.as_deref().unwrap_or_default();

        Self {
            title: text.to_string(),
            excerpt: format!("\"{}\"", excerpt(text)),
            emoji: emoji(label),
            label: capitalize(label),
            language: language_badge(entry.language.as_deref()),
        }
    }
}

/// Rendered history panel
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HistoryView {
    /// Nothing fetched yet
    #[default]
    Loading,
    /// Fetched, nothing to show
    Empty,
    /// Fetch failed
    Unavailable,
    Rows(Vec<HistoryRow>),
}

impl HistoryView {
    /// Project server entries (oldest first) into panel rows
    ///
    /// Keeps the last [`HISTORY_VISIBLE`] entries and reverses them, so the
    /// newest entry comes first.
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        if entries.is_empty() {
            return HistoryView::Empty;
        }

        let start = entries.len().saturating_sub(HISTORY_VISIBLE);
        let rows = entries[start..].iter().rev().map(HistoryRow::from).collect();
        HistoryView::Rows(rows)
    }

    /// Placeholder text, when no rows are shown
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            HistoryView::Loading => Some("Chargement..."),
            HistoryView::Empty => Some("Aucun historique"),
            HistoryView::Unavailable => Some("Historique indisponible"),
            HistoryView::Rows(_) => None,
        }
    }
}
