//! Subcommand implementations.

/// Language detection report.
pub mod detect;

/// Provider listing command handler.
pub mod providers;

/// Translation command handler.
pub mod translate;

use tracing::warn;

use crate::cache::{CacheManager, CachedService};
use crate::config::ResolvedConfig;
use crate::translation::{InputToolsClient, LlmService, TranslationService, Transliteration};

/// Builds the backend for a resolved provider, behind the cache unless disabled.
///
/// An unusable cache is logged and skipped.
pub fn build_service(config: &ResolvedConfig, no_cache: bool) -> Box<dyn TranslationService> {
    let llm = LlmService::new(
        config.endpoint.clone(),
        config.api_key.clone(),
        config.model.clone(),
        config.languages.clone(),
    );
    if no_cache {
        return Box::new(llm);
    }

    match CacheManager::new() {
        Ok(cache) => {
            let backend = llm.backend_id();
            Box::new(CachedService::new(llm, cache, backend))
        }
        Err(e) => {
            warn!(error = %e, "cache unavailable, continuing without it");
            Box::new(llm)
        }
    }
}

/// Builds the transliteration adapter, or a pass-through one when disabled.
pub fn build_transliteration(config: &ResolvedConfig) -> Transliteration {
    config
        .transliteration_endpoint
        .clone()
        .map_or_else(Transliteration::unavailable, |endpoint| {
            Transliteration::new(InputToolsClient::new(endpoint))
        })
}
