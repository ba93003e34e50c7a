//! Wire types and response decoding
//!
//! Decoding is kept free of any browser API so it can be tested natively.

use serde::{Deserialize, Serialize};

use super::ClientError;

/// Body of `POST /analyze`
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

/// Successful `POST /analyze` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub label: String,
    pub score: f64,
    #[serde(default)]
    pub language: Option<String>,
}

/// One past analysis from `GET /history`; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl HistoryEntry {
    /// `text`, falling back to `full_text` when missing or empty
    pub fn display_text(&self) -> &str {
        self.text
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.full_text.as_deref())
            .unwrap_or_default()
    }
}

/// `{ message }` body carried by confirmations and errors
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Extract the `message` field of an error body, if any
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
}

/// Decode a `POST /analyze` response
pub fn decode_analysis(ok: bool, status: u16, body: &str) -> Result<AnalysisResult, ClientError> {
    if !ok {
        return Err(ClientError::Server {
            status,
            message: error_message(body),
        });
    }

    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Decode a `GET /history` body
///
/// The status is not inspected. Anything that is valid JSON but not an
/// array reads as an empty history; array items that do not look like
/// entries are skipped. Invalid JSON is an error.
pub fn decode_history(body: &str) -> Result<Vec<HistoryEntry>, ClientError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;

    let entries = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    };

    Ok(entries)
}

/// Decode a `DELETE /clear-history` response into its message
///
/// A 2xx reply must still carry JSON; anything else is not a confirmed clear.
pub fn decode_clear(ok: bool, status: u16, body: &str) -> Result<Option<String>, ClientError> {
    if !ok {
        return Err(ClientError::Server {
            status,
            message: error_message(body),
        });
    }

    let body: MessageBody =
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;
    Ok(body.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_analysis_success() {
        let body = r#"{"status":"success","label":"positive","score":0.91,"language":"eng","all_results":[]}"#;
        let result = decode_analysis(true, 200, body).unwrap();
        assert_eq!(result.label, "positive");
        assert_eq!(result.score, 0.91);
        assert_eq!(result.language.as_deref(), Some("eng"));
    }

    #[test]
    fn test_decode_analysis_without_language() {
        let result = decode_analysis(true, 200, r#"{"label":"neutral","score":0.5}"#).unwrap();
        assert_eq!(result.language, None);
    }

    #[test]
    fn test_decode_analysis_server_message() {
        let err = decode_analysis(false, 500, r#"{"status":"error","message":"boom"}"#).unwrap_err();
        assert_eq!(
            err,
            ClientError::Server {
                status: 500,
                message: Some("boom".to_string())
            }
        );
    }

    #[test]
    fn test_decode_analysis_server_without_message() {
        let err = decode_analysis(false, 502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.user_message(), "Erreur inconnue");
    }

    #[test]
    fn test_decode_analysis_malformed_success() {
        let err = decode_analysis(true, 200, r#"{"label":"positive"}"#).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_decode_history_array() {
        let body = r#"[{"text":"a","label":"positive","language":"eng"},{"full_text":"b"}]"#;
        let entries = decode_history(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].display_text(), "a");
        assert_eq!(entries[1].display_text(), "b");
    }

    #[test]
    fn test_decode_history_non_array_is_empty() {
        assert!(decode_history(r#"{"message":"oops"}"#).unwrap().is_empty());
        assert!(decode_history("null").unwrap().is_empty());
    }

    #[test]
    fn test_decode_history_skips_odd_items() {
        let entries = decode_history(r#"[42, {"text":"kept"}, "x"]"#).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_text(), "kept");
    }

    #[test]
    fn test_decode_history_invalid_json() {
        assert!(matches!(decode_history("<html>"), Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_display_text_falls_back_on_empty() {
        let entry = HistoryEntry {
            text: Some(String::new()),
            full_text: Some("full".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.display_text(), "full");
        assert_eq!(HistoryEntry::default().display_text(), "");
    }

    #[test]
    fn test_decode_clear() {
        let ok = decode_clear(true, 200, r#"{"status":"success","message":"Historique effacé."}"#);
        assert_eq!(ok.unwrap().as_deref(), Some("Historique effacé."));

        let err = decode_clear(false, 500, r#"{"status":"error","message":"disk full"}"#).unwrap_err();
        assert_eq!(err.user_message(), "disk full");
    }

    #[test]
    fn test_decode_clear_success_without_json() {
        let err = decode_clear(true, 200, "<html>OK</html>").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
        assert_eq!(err.user_message(), "Réponse invalide du serveur");

        assert_eq!(decode_clear(true, 200, "{}").unwrap(), None);
    }
}
