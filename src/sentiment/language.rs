//! Language detection

/// Reported for inputs too short to detect reliably
pub const SHORT_TEXT: &str = "short-text";

/// Reported when no language could be determined
pub const UNDETERMINED: &str = "undetermined";

/// Inputs with fewer characters are reported as [`SHORT_TEXT`]
const MIN_DETECT_CHARS: usize = 10;

/// Only the head of the input is sampled
const SAMPLE_CHARS: usize = 200;

/// Detect the language of `text` as an ISO 639-3 code
pub fn detect_language(text: &str) -> String {
    if text.chars().count() < MIN_DETECT_CHARS {
        return SHORT_TEXT.to_string();
    }

    let sample: String = text.chars().take(SAMPLE_CHARS).collect();

    match whatlang::detect(&sample) {
        Some(info) if info.is_reliable() => info.lang().code().to_string(),
        Some(info) => {
            tracing::debug!(
                lang = info.lang().code(),
                confidence = info.confidence(),
                "Unreliable language detection"
            );
            UNDETERMINED.to_string()
        }
        None => UNDETERMINED.to_string(),
    }
}
