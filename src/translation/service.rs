//! Interfaces to the external translation and transliteration backends.

use async_trait::async_trait;

use super::language::LanguageTable;

/// Short language identifier such as `"hi"` or `"zh-TW"`.
pub type LanguageCode = String;

/// Source language value that asks the backend to detect the language itself.
pub const AUTO: &str = "auto";

/// Errors raised by an external backend call.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid endpoint URL '{0}'")]
    InvalidEndpoint(String),

    #[error("Unsupported language: '{0}'")]
    InvalidLanguage(String),

    #[error("Service returned an empty response")]
    EmptyResponse,

    #[error("No translation service configured")]
    Unavailable,
}

/// A machine-translation backend.
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Translates `text` from `source` (or [`AUTO`]) into `target`.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ServiceError>;

    /// Identifies the language of `text`.
    async fn detect_language(&self, text: &str) -> Result<LanguageCode, ServiceError>;

    /// The code-to-name table this backend accepts.
    fn supported_languages(&self) -> &LanguageTable;
}

#[async_trait]
impl<T: TranslationService + ?Sized> TranslationService for Box<T> {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ServiceError> {
        (**self).translate(text, source, target).await
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, ServiceError> {
        (**self).detect_language(text).await
    }

    fn supported_languages(&self) -> &LanguageTable {
        (**self).supported_languages()
    }
}

/// A romanized-to-native-script converter.
#[async_trait]
pub trait Transliterator: Send + Sync {
    /// Converts romanized `text` into the native script of `language`.
    async fn transliterate(&self, text: &str, language: &str) -> Result<String, ServiceError>;
}

/// Stand-in used when no provider is configured.
///
/// Every call fails with [`ServiceError::Unavailable`], so detection runs on
/// the word tables alone.
#[derive(Debug, Default)]
pub struct OfflineService {
    languages: LanguageTable,
}

impl OfflineService {
    pub const fn new(languages: LanguageTable) -> Self {
        Self { languages }
    }
}

#[async_trait]
impl TranslationService for OfflineService {
    async fn translate(&self, _: &str, _: &str, _: &str) -> Result<String, ServiceError> {
        Err(ServiceError::Unavailable)
    }

    async fn detect_language(&self, _: &str) -> Result<LanguageCode, ServiceError> {
        Err(ServiceError::Unavailable)
    }

    fn supported_languages(&self) -> &LanguageTable {
        &self.languages
    }
}
