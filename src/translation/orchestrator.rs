//! Translation strategies for mixed-language and romanized input.
//!
//! Three strategies sit on top of a [`TranslationService`]:
//!
//! - [`Translator::translate`]: whole text, or sentence by sentence
//! - [`Translator::translate_with_transliteration`]: clause by clause, converting
//!   romanized Indian clauses to native script before translating them
//! - [`Translator::translate_smart`]: segment by word language, convert the Indian
//!   segments, then translate the rebuilt sentence in a single call
//!
//! Whole-request failures come back in-band as a string starting with
//! [`ERROR_PREFIX`]; per-part failures keep the original part.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::service::{AUTO, LanguageCode, ServiceError, TranslationService};
use super::transliterate::Transliteration;
use crate::detect::{
    CLAUSE_DELIMITERS, DetectionResult, FALSE_POSITIVE_LANGUAGES, LanguageDetector, Piece,
    SENTENCE_TERMINATORS, is_latin, is_romanized, segment, split_keeping, split_padding,
};

/// Indian languages whose romanized clauses are transliterated before translation.
pub const TRANSLITERATION_LANGUAGES: &[&str] = &[
    "hi", "mr", "bn", "gu", "pa", "or", "ta", "te", "kn", "ml", "ne", "sa",
];

/// Segment languages converted to native script by the smart strategy.
pub const SMART_TRANSLITERATION_LANGUAGES: &[&str] =
    &["hi", "kn", "mr", "gu", "pa", "ta", "te", "bn", "ml"];

/// Prefix of an in-band failure result.
pub const ERROR_PREFIX: &str = "Error: ";

/// Romanized texts with more words than this go through the smart strategy.
const SMART_WORD_THRESHOLD: usize = 4;

/// Formats a whole-request failure the way callers expect it in-band.
pub fn error_result(error: &ServiceError) -> String {
    format!("{ERROR_PREFIX}{error}")
}

/// Returns `true` if `result` is an in-band failure.
pub fn is_error_result(result: &str) -> bool {
    result.starts_with(ERROR_PREFIX)
}

/// User-selectable translation mode.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Pick a strategy from the input
    #[default]
    Auto,
    /// Translate the whole text in one call
    Whole,
    /// Translate sentence by sentence
    Sentence,
    /// Segment, transliterate, then translate in one call
    Smart,
    /// Transliterate and translate clause by clause
    Translit,
}

/// Why the smart strategy was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartReason {
    RomanizedIndian,
    Mixed,
    LongRomanized,
    /// Chosen with `--mode smart`.
    Requested,
}

/// The translation strategy applied to one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Whole,
    Sentence,
    Smart(SmartReason),
    Transliterate,
}

impl Strategy {
    /// Maps an explicit mode to a strategy, or `None` for [`Mode::Auto`].
    pub const fn from_mode(mode: Mode) -> Option<Self> {
        match mode {
            Mode::Auto => None,
            Mode::Whole => Some(Self::Whole),
            Mode::Sentence => Some(Self::Sentence),
            Mode::Smart => Some(Self::Smart(SmartReason::Requested)),
            Mode::Translit => Some(Self::Transliterate),
        }
    }
}

/// Picks a strategy from the text and its detection report.
///
/// Romanized text with an Indian language, mixed text, and long romanized
/// text go through the smart strategy. Everything else is translated whole,
/// or sentence by sentence when `split_mode` is set.
pub fn choose_strategy(text: &str, detection: &DetectionResult, split_mode: bool) -> Strategy {
    let romanized = is_romanized(text);

    if romanized && detection.contains_any(TRANSLITERATION_LANGUAGES) {
        Strategy::Smart(SmartReason::RomanizedIndian)
    } else if detection.is_mixed {
        Strategy::Smart(SmartReason::Mixed)
    } else if romanized && text.split_whitespace().count() > SMART_WORD_THRESHOLD {
        Strategy::Smart(SmartReason::LongRomanized)
    } else if split_mode {
        Strategy::Sentence
    } else {
        Strategy::Whole
    }
}

/// Result of [`Translator::translate_with_transliteration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MixedTranslation {
    pub text: String,
    /// Languages seen across the clauses, first-seen order, no duplicates.
    pub languages: Vec<LanguageCode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PartPlan {
    /// Convert to the native script of the language, then translate from it.
    Transliterate(LanguageCode),
    /// Translate with automatic source detection.
    Direct,
}

/// Decides how to handle one clause and what language to carry forward.
///
/// A false-positive verdict on a romanized clause borrows the last Indian
/// language seen, since short Hinglish clauses are often misdetected.
fn plan_part(
    lang: &str,
    latin: bool,
    available: bool,
    carry: Option<LanguageCode>,
) -> (PartPlan, Option<LanguageCode>) {
    if latin && available {
        if TRANSLITERATION_LANGUAGES.contains(&lang) {
            return (PartPlan::Transliterate(lang.to_string()), Some(lang.to_string()));
        }
        if FALSE_POSITIVE_LANGUAGES.contains(&lang)
            && let Some(carried) = &carry
        {
            return (PartPlan::Transliterate(carried.clone()), carry);
        }
    }
    (PartPlan::Direct, carry)
}

/// Code reported for a clause, if any.
fn reported_language<'a>(plan: &'a PartPlan, detected: &'a str) -> Option<&'a str> {
    match plan {
        PartPlan::Transliterate(lang) => Some(lang.as_str()),
        PartPlan::Direct if detected == AUTO || FALSE_POSITIVE_LANGUAGES.contains(&detected) => {
            None
        }
        PartPlan::Direct => Some(detected),
    }
}

fn rewrap(lead: &str, core: &str, trail: &str) -> String {
    format!("{lead}{core}{trail}")
}

/// Runs the translation strategies against a service.
pub struct Translator<S> {
    service: S,
    transliteration: Transliteration,
}

impl<S: TranslationService> Translator<S> {
    pub const fn new(service: S, transliteration: Transliteration) -> Self {
        Self {
            service,
            transliteration,
        }
    }

    pub const fn service(&self) -> &S {
        &self.service
    }

    pub fn detector(&self) -> LanguageDetector<'_> {
        LanguageDetector::new(&self.service)
    }

    pub async fn detect_language(&self, text: &str) -> LanguageCode {
        self.detector().detect_language(text).await
    }

    pub async fn detect_mixed_languages(&self, text: &str) -> DetectionResult {
        self.detector().detect_mixed_languages(text).await
    }

    /// Translates `text`, returning an in-band error string on failure.
    pub async fn translate(
        &self,
        text: &str,
        dest: &str,
        src: &str,
        split_sentences: bool,
    ) -> String {
        self.try_translate(text, dest, src, split_sentences)
            .await
            .unwrap_or_else(|e| error_result(&e))
    }

    /// Translates `text` whole or sentence by sentence.
    ///
    /// In sentence mode the terminators and the whitespace around each
    /// sentence are kept exactly; the first failing sentence fails the request.
    pub async fn try_translate(
        &self,
        text: &str,
        dest: &str,
        src: &str,
        split_sentences: bool,
    ) -> Result<String, ServiceError> {
        if !split_sentences {
            return self.service.translate(text, src, dest).await;
        }

        let mut translated = String::with_capacity(text.len());
        for piece in split_keeping(text, &SENTENCE_TERMINATORS) {
            let Some(part) = piece.content() else {
                translated.push_str(piece.as_str());
                continue;
            };
            let (lead, core, trail) = split_padding(part);
            let result = self.service.translate(core, src, dest).await?;
            translated.push_str(&rewrap(lead, &result, trail));
        }
        Ok(translated)
    }

    /// Translates clause by clause, transliterating romanized Indian clauses first.
    ///
    /// `detected_lang`, when it is an Indian language, is carried into the
    /// first clauses as if a previous clause had been detected as it.
    pub async fn translate_with_transliteration(
        &self,
        text: &str,
        dest: &str,
        detected_lang: Option<&str>,
    ) -> MixedTranslation {
        let mut carry = detected_lang
            .filter(|lang| TRANSLITERATION_LANGUAGES.contains(lang))
            .map(str::to_string);
        let mut languages: Vec<LanguageCode> = Vec::new();
        let mut translated = String::with_capacity(text.len());

        for piece in split_keeping(text, &CLAUSE_DELIMITERS) {
            let Piece::Text(part) = piece else {
                translated.push_str(piece.as_str());
                continue;
            };
            if part.trim().is_empty() {
                translated.push_str(part);
                continue;
            }

            let (lead, core, trail) = split_padding(part);
            let detected = self.detect_language(core).await;
            let (plan, next) = plan_part(
                &detected,
                is_latin(core),
                self.transliteration.is_available(),
                carry,
            );
            carry = next;

            if let Some(code) = reported_language(&plan, &detected)
                && !languages.iter().any(|l| l == code)
            {
                languages.push(code.to_string());
            }

            match self.translate_part(core, dest, &plan).await {
                Ok(result) => translated.push_str(&rewrap(lead, &result, trail)),
                Err(e) => {
                    warn!(error = %e, part = core, "clause translation failed, keeping original");
                    translated.push_str(part);
                }
            }
        }

        MixedTranslation {
            text: translated,
            languages,
        }
    }

    async fn translate_part(
        &self,
        core: &str,
        dest: &str,
        plan: &PartPlan,
    ) -> Result<String, ServiceError> {
        match plan {
            PartPlan::Transliterate(lang) => {
                let native = self.transliteration.transliterate(core, lang).await;
                self.service.translate(&native, lang, dest).await
            }
            PartPlan::Direct => self.service.translate(core, AUTO, dest).await,
        }
    }

    /// Rebuilds `text` with its Indian segments in native script.
    pub async fn mixed_script_sentence(&self, text: &str) -> String {
        let mut parts: Vec<String> = Vec::new();
        for seg in segment(text) {
            if SMART_TRANSLITERATION_LANGUAGES.contains(&seg.lang) {
                parts.push(self.transliteration.transliterate(&seg.text, seg.lang).await);
            } else {
                parts.push(seg.text);
            }
        }
        parts.join(" ")
    }

    /// Segments, transliterates, and translates the rebuilt sentence in one call.
    pub async fn translate_smart(&self, text: &str, dest: &str) -> String {
        self.try_translate_smart(text, dest)
            .await
            .unwrap_or_else(|e| error_result(&e))
    }

    pub async fn try_translate_smart(&self, text: &str, dest: &str) -> Result<String, ServiceError> {
        let sentence = self.mixed_script_sentence(text).await;
        let source = smart_source_language(dest);
        debug!(%sentence, source, dest, "smart translation");
        self.service.translate(&sentence, source, dest).await
    }
}

/// Source language for the single smart-translation call.
///
/// Hindi targets force English so the Latin words get translated instead of
/// being kept as code-switching; other targets let the backend detect.
pub fn smart_source_language(dest: &str) -> &'static str {
    if dest == "hi" { "en" } else { AUTO }
}
