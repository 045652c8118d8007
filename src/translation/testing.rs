//! In-memory backends for unit tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use super::language::LanguageTable;
use super::service::{LanguageCode, ServiceError, TranslationService, Transliterator};

enum Detection {
    Fixed(&'static str),
    By(fn(&str) -> &'static str),
    Fail,
}

enum Translation {
    Identity,
    With(fn(&str, &str, &str) -> String),
    Fail,
    FailOn(&'static str),
}

/// A scripted [`TranslationService`] that records every call.
pub struct ScriptedService {
    languages: LanguageTable,
    detection: Detection,
    translation: Translation,
    detect_calls: Mutex<Vec<String>>,
    translate_calls: Mutex<Vec<(String, String, String)>>,
}

impl ScriptedService {
    /// Detects everything as English and translates as the identity.
    pub fn new() -> Self {
        Self {
            languages: LanguageTable::default(),
            detection: Detection::Fixed("en"),
            translation: Translation::Identity,
            detect_calls: Mutex::new(Vec::new()),
            translate_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn detecting(mut self, code: &'static str) -> Self {
        self.detection = Detection::Fixed(code);
        self
    }

    pub fn detecting_by(mut self, f: fn(&str) -> &'static str) -> Self {
        self.detection = Detection::By(f);
        self
    }

    pub fn failing_detection(mut self) -> Self {
        self.detection = Detection::Fail;
        self
    }

    pub fn translating_with(mut self, f: fn(&str, &str, &str) -> String) -> Self {
        self.translation = Translation::With(f);
        self
    }

    pub fn failing_translation(mut self) -> Self {
        self.translation = Translation::Fail;
        self
    }

    /// Fails only when asked to translate exactly `text`.
    pub fn failing_on(mut self, text: &'static str) -> Self {
        self.translation = Translation::FailOn(text);
        self
    }

    pub fn detect_calls(&self) -> Vec<String> {
        self.detect_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded `(text, source, target)` triples.
    pub fn translate_calls(&self) -> Vec<(String, String, String)> {
        self.translate_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl TranslationService for ScriptedService {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ServiceError> {
        self.translate_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((text.to_string(), source.to_string(), target.to_string()));

        match self.translation {
            Translation::Identity => Ok(text.to_string()),
            Translation::With(f) => Ok(f(text, source, target)),
            Translation::Fail => Err(ServiceError::EmptyResponse),
            Translation::FailOn(bad) if bad == text => Err(ServiceError::EmptyResponse),
            Translation::FailOn(_) => Ok(text.to_string()),
        }
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, ServiceError> {
        self.detect_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());

        match self.detection {
            Detection::Fixed(code) => Ok(code.to_string()),
            Detection::By(f) => Ok(f(text).to_string()),
            Detection::Fail => Err(ServiceError::Unavailable),
        }
    }

    fn supported_languages(&self) -> &LanguageTable {
        &self.languages
    }
}

/// A dictionary-backed [`Transliterator`] for a handful of Hindi words.
///
/// Unknown words pass through. Clones share the call log.
#[derive(Clone, Default)]
pub struct ScriptedTransliterator {
    fail: bool,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

const DEVANAGARI: &[(&str, &str)] = &[
    ("aap", "आप"),
    ("ek", "एक"),
    ("hai", "है"),
    ("ho", "हो"),
    ("kaise", "कैसे"),
    ("namaste", "नमस्ते"),
];

impl ScriptedTransliterator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Recorded `(text, language)` pairs.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Transliterator for ScriptedTransliterator {
    async fn transliterate(&self, text: &str, language: &str) -> Result<String, ServiceError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((text.to_string(), language.to_string()));

        if self.fail {
            return Err(ServiceError::Unavailable);
        }

        let words: Vec<&str> = text
            .split_whitespace()
            .map(|word| {
                DEVANAGARI
                    .iter()
                    .find(|(roman, _)| roman.eq_ignore_ascii_case(word))
                    .map_or(word, |(_, native)| *native)
            })
            .collect();
        Ok(words.join(" "))
    }
}
