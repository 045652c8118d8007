//! Language detection combining local word evidence with the backend.

use serde::Serialize;
use tracing::debug;

use super::patterns::{VOTE_TABLE, WORD_TABLE, normalize_word};
use super::script::has_native_script;
use super::split::{CLAUSE_DELIMITERS, split_keeping};
use crate::translation::{AUTO, LanguageCode, LanguageTable, ServiceError, TranslationService};

/// Codes a generic detector tends to report for short romanized Indian words.
pub const FALSE_POSITIVE_LANGUAGES: &[&str] = &[
    "vi", "tl", "id", "ms", "so", "da", "et", "nl", "fi", "no", "af", "sw",
];

/// Hints that override a backend verdict of English.
const ENGLISH_OVERRIDE_HINTS: &[&str] = &["hi", "gu", "mr", "pa", "kn", "ta", "te"];

/// Fallback when there is no local evidence and the backend is unreachable.
const DEFAULT_LANGUAGE: &str = "en";

/// Why a detection could not produce a code on its own.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("nothing to detect")]
    Empty,

    #[error("native-script detection failed: {0}")]
    Service(#[source] ServiceError),

    #[error("no local evidence and backend detection failed: {0}")]
    Ambiguous(#[source] ServiceError),
}

impl DetectError {
    /// The code reported in place of a failed detection.
    pub const fn fallback(&self) -> &'static str {
        match self {
            Self::Ambiguous(_) => DEFAULT_LANGUAGE,
            Self::Empty | Self::Service(_) => AUTO,
        }
    }
}

/// One language found in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedLanguage {
    pub code: LanguageCode,
    pub name: String,
}

/// The set of languages found in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    pub is_mixed: bool,
    pub count: usize,
    pub languages: Vec<DetectedLanguage>,
}

impl DetectionResult {
    /// Builds a result from codes in first-seen order, dropping duplicates.
    pub fn from_codes<I>(codes: I, table: &LanguageTable) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LanguageCode>,
    {
        let mut languages: Vec<DetectedLanguage> = Vec::new();
        for code in codes {
            let code = code.into();
            if languages.iter().any(|l| l.code == code) {
                continue;
            }
            let name = table.display_name(&code).to_string();
            languages.push(DetectedLanguage { code, name });
        }

        Self {
            is_mixed: languages.len() > 1,
            count: languages.len(),
            languages,
        }
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.code.as_str())
    }

    /// Returns `true` if any detected code is in `set`.
    pub fn contains_any(&self, set: &[&str]) -> bool {
        self.codes().any(|code| set.contains(&code))
    }
}

/// Applies the false-positive corrections to a backend verdict.
///
/// `hint` is the language of the single locally recognised word, if any.
pub fn correct_detection(detected: &str, hint: Option<&str>) -> LanguageCode {
    match hint {
        Some(hint) if FALSE_POSITIVE_LANGUAGES.contains(&detected) => hint.to_string(),
        Some(hint) if detected == "en" && ENGLISH_OVERRIDE_HINTS.contains(&hint) => {
            hint.to_string()
        }
        _ => detected.to_string(),
    }
}

/// Detects languages using the word tables first and the backend second.
pub struct LanguageDetector<'a> {
    service: &'a dyn TranslationService,
}

impl<'a> LanguageDetector<'a> {
    pub const fn new(service: &'a dyn TranslationService) -> Self {
        Self { service }
    }

    /// Detects the language of `text`, never failing.
    ///
    /// Falls back to `"en"` when nothing local matched and the backend
    /// failed, and to `"auto"` for empty input or a failed native-script
    /// lookup.
    pub async fn detect_language(&self, text: &str) -> LanguageCode {
        match self.try_detect(text).await {
            Ok(code) => code,
            Err(e) => {
                debug!(error = %e, fallback = e.fallback(), "language detection fell back");
                e.fallback().to_string()
            }
        }
    }

    /// Detects the language of `text`, reporting why a fallback would be needed.
    pub async fn try_detect(&self, text: &str) -> Result<LanguageCode, DetectError> {
        if text.trim().is_empty() {
            return Err(DetectError::Empty);
        }

        if has_native_script(text) {
            let code = self
                .service
                .detect_language(text)
                .await
                .map_err(DetectError::Service)?;
            debug!(%code, "native script, using backend detection");
            return Ok(code);
        }

        let vote = VOTE_TABLE.vote(text);
        if let Some(code) = vote.exact {
            debug!(code, "single known word");
            return Ok(code.to_string());
        }
        if let (Some(code), 2..) = (vote.best, vote.count) {
            debug!(code, count = vote.count, "word vote");
            return Ok(code.to_string());
        }

        let hint = vote.hint();
        match self.service.detect_language(text).await {
            Ok(detected) => {
                let code = correct_detection(&detected, hint);
                debug!(%detected, ?hint, %code, "backend detection");
                Ok(code)
            }
            Err(e) => hint.map(str::to_string).ok_or(DetectError::Ambiguous(e)),
        }
    }

    /// Finds every language present in `text`.
    ///
    /// Each word is checked against all word tables, so one word may count
    /// for several languages. Only when no word is recognised is the text
    /// split into clauses and each clause detected on its own.
    pub async fn detect_mixed_languages(&self, text: &str) -> DetectionResult {
        let mut codes: Vec<LanguageCode> = Vec::new();

        for word in text.split_whitespace() {
            let token = normalize_word(word).to_lowercase();
            if token.is_empty() {
                continue;
            }
            codes.extend(WORD_TABLE.matches(&token).map(str::to_string));
        }

        if codes.is_empty() {
            for piece in split_keeping(text, &CLAUSE_DELIMITERS) {
                let Some(part) = piece.content() else {
                    continue;
                };
                let code = self.detect_language(part.trim()).await;
                if code != AUTO {
                    codes.push(code);
                }
            }
        }

        let result = DetectionResult::from_codes(codes, self.service.supported_languages());
        debug!(
            is_mixed = result.is_mixed,
            codes = ?result.codes().collect::<Vec<_>>(),
            "mixed-language detection"
        );
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::testing::ScriptedService;

    #[test]
    fn test_correct_detection_false_positive_with_hint() {
        assert_eq!(correct_detection("tl", Some("hi")), "hi");
        assert_eq!(correct_detection("sw", Some("kn")), "kn");
    }

    #[test]
    fn test_correct_detection_false_positive_without_hint() {
        assert_eq!(correct_detection("tl", None), "tl");
    }

    #[test]
    fn test_correct_detection_english_bias() {
        assert_eq!(correct_detection("en", Some("mr")), "mr");
        // es is not an Indian hint, so English stands
        assert_eq!(correct_detection("en", Some("es")), "en");
    }

    #[test]
    fn test_correct_detection_other_verdict_kept() {
        assert_eq!(correct_detection("fr", Some("hi")), "fr");
    }

    #[tokio::test]
    async fn test_native_script_uses_backend_directly() {
        // the Hindi words would win a local vote if it ran
        let service = ScriptedService::new().detecting("mr");
        let detector = LanguageDetector::new(&service);

        assert_eq!(detector.detect_language("नमस्ते aap kaise ho").await, "mr");
        assert_eq!(service.detect_calls(), vec!["नमस्ते aap kaise ho"]);
    }

    #[tokio::test]
    async fn test_native_script_failure_is_auto() {
        let service = ScriptedService::new().failing_detection();
        let detector = LanguageDetector::new(&service);

        assert_eq!(detector.detect_language("こんにちは").await, "auto");
    }

    #[tokio::test]
    async fn test_single_known_word_skips_backend() {
        let service = ScriptedService::new().detecting("tl");
        let detector = LanguageDetector::new(&service);

        assert_eq!(detector.detect_language("Namaste").await, "hi");
        assert!(service.detect_calls().is_empty());
    }

    #[tokio::test]
    async fn test_strong_vote_skips_backend() {
        let service = ScriptedService::new().detecting("id");
        let detector = LanguageDetector::new(&service);

        assert_eq!(detector.detect_language("aap kaise hai").await, "hi");
        assert!(service.detect_calls().is_empty());
    }

    #[tokio::test]
    async fn test_weak_vote_corrects_false_positive() {
        let service = ScriptedService::new().detecting("tl");
        let detector = LanguageDetector::new(&service);

        assert_eq!(detector.detect_language("chalo kaise").await, "hi");
        assert_eq!(service.detect_calls(), vec!["chalo kaise"]);
    }

    #[tokio::test]
    async fn test_no_evidence_trusts_backend() {
        let service = ScriptedService::new().detecting("it");
        let detector = LanguageDetector::new(&service);

        assert_eq!(detector.detect_language("buongiorno amico").await, "it");
    }

    #[tokio::test]
    async fn test_backend_failure_uses_hint_or_english() {
        let service = ScriptedService::new().failing_detection();
        let detector = LanguageDetector::new(&service);

        assert_eq!(detector.detect_language("chalo kaise").await, "hi");
        assert_eq!(detector.detect_language("buongiorno").await, "en");
        assert!(matches!(
            detector.try_detect("buongiorno").await,
            Err(DetectError::Ambiguous(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_input_is_auto() {
        let service = ScriptedService::new();
        let detector = LanguageDetector::new(&service);

        assert_eq!(detector.detect_language("   ").await, "auto");
        assert!(service.detect_calls().is_empty());
    }

    #[tokio::test]
    async fn test_mixed_detection_word_level() {
        let service = ScriptedService::new();
        let detector = LanguageDetector::new(&service);

        let result = detector
            .detect_mixed_languages("Speaker diarization ek process hai")
            .await;

        assert!(result.is_mixed);
        // "hai" is listed for both Hindi and Punjabi
        assert_eq!(result.codes().collect::<Vec<_>>(), vec!["en", "hi", "pa"]);
        assert_eq!(result.count, 3);
        assert_eq!(result.languages[1].name, "Hindi");
        assert!(service.detect_calls().is_empty());
    }

    #[tokio::test]
    async fn test_mixed_detection_single_language() {
        let service = ScriptedService::new();
        let detector = LanguageDetector::new(&service);

        let result = detector.detect_mixed_languages("Hello, what is this?").await;

        assert!(!result.is_mixed);
        assert_eq!(result.codes().collect::<Vec<_>>(), vec!["en"]);
    }

    #[tokio::test]
    async fn test_mixed_detection_falls_back_to_clauses() {
        let service = ScriptedService::new().detecting_by(|text| {
            if text.starts_with("Bonjour") { "fr" } else { "de" }
        });
        let detector = LanguageDetector::new(&service);

        let result = detector
            .detect_mixed_languages("Bonjour mon ami. Guten Tag!")
            .await;

        assert!(result.is_mixed);
        assert_eq!(result.codes().collect::<Vec<_>>(), vec!["fr", "de"]);
        assert_eq!(
            service.detect_calls(),
            vec!["Bonjour mon ami", "Guten Tag"]
        );
    }

    #[tokio::test]
    async fn test_mixed_detection_is_idempotent() {
        let service = ScriptedService::new().detecting("it");
        let detector = LanguageDetector::new(&service);

        for text in ["kem cho, idu enna", "ciao bella. arrivederci"] {
            let first = detector.detect_mixed_languages(text).await;
            let second = detector.detect_mixed_languages(text).await;

            let mut a: Vec<_> = first.codes().collect();
            let mut b: Vec<_> = second.codes().collect();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_detection_result_dedupes_and_names() {
        let table = LanguageTable::default();
        let result = DetectionResult::from_codes(["hi", "en", "hi", "zz"], &table);

        assert_eq!(result.count, 3);
        assert!(result.is_mixed);
        assert_eq!(result.languages[2].name, "zz");
        assert!(result.contains_any(&["kn", "hi"]));
        assert!(!result.contains_any(&["kn"]));
    }

    #[test]
    fn test_detection_result_serializes() {
        let table = LanguageTable::default();
        let result = DetectionResult::from_codes(["kn"], &table);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["is_mixed"], false);
        assert_eq!(json["languages"][0]["name"], "Kannada");
    }
}
