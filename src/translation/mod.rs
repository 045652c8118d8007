mod client;
mod language;
mod orchestrator;
mod prompt;
mod service;
mod sse_parser;
mod transliterate;

#[cfg(test)]
pub(crate) mod testing;

pub use client::LlmService;
pub use language::{
    EXTENDED_LANGUAGES, INDIAN_LANGUAGES, LanguageTable, SUPPORTED_LANGUAGES, print_languages,
};
pub use orchestrator::{
    ERROR_PREFIX, MixedTranslation, Mode, SMART_TRANSLITERATION_LANGUAGES, SmartReason, Strategy,
    TRANSLITERATION_LANGUAGES, Translator, choose_strategy, error_result, is_error_result,
    smart_source_language,
};
pub use prompt::{DETECTION_PROMPT, TRANSLATION_PROMPT_TEMPLATE};
pub use service::{AUTO, LanguageCode, OfflineService, ServiceError, TranslationService, Transliterator};
pub use transliterate::{INPUT_TOOLS_ENDPOINT, InputToolsClient, Transliteration};
