//! Result cache for backend calls.

mod sqlite;

use async_trait::async_trait;
use tracing::{debug, warn};

pub use sqlite::{CacheKind, CacheManager, CacheRequest};

use crate::translation::{AUTO, LanguageCode, LanguageTable, ServiceError, TranslationService};

/// A [`TranslationService`] decorator that answers repeated requests from the cache.
///
/// Cache failures are logged and never fail the request. Failed backend
/// calls are not cached.
pub struct CachedService<S> {
    inner: S,
    cache: CacheManager,
    backend: String,
}

impl<S: TranslationService> CachedService<S> {
    /// `backend` identifies the endpoint and model behind `inner`.
    pub const fn new(inner: S, cache: CacheManager, backend: String) -> Self {
        Self {
            inner,
            cache,
            backend,
        }
    }

    pub const fn inner(&self) -> &S {
        &self.inner
    }

    fn lookup(&self, request: &CacheRequest<'_>) -> Option<String> {
        match self.cache.get(request) {
            Ok(hit) => {
                if hit.is_some() {
                    debug!(kind = ?request.kind, "cache hit");
                }
                hit
            }
            Err(e) => {
                warn!(error = %e, "cache read failed");
                None
            }
        }
    }

    fn store(&self, request: &CacheRequest<'_>, result: &str) {
        if let Err(e) = self.cache.put(request, result) {
            warn!(error = %e, "cache write failed");
        }
    }
}

#[async_trait]
impl<S: TranslationService> TranslationService for CachedService<S> {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ServiceError> {
        let request = CacheRequest {
            kind: CacheKind::Translate,
            text,
            source,
            target,
            backend: &self.backend,
        };
        if let Some(hit) = self.lookup(&request) {
            return Ok(hit);
        }

        let result = self.inner.translate(text, source, target).await?;
        self.store(&request, &result);
        Ok(result)
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, ServiceError> {
        let request = CacheRequest {
            kind: CacheKind::Detect,
            text,
            source: AUTO,
            target: "",
            backend: &self.backend,
        };
        if let Some(hit) = self.lookup(&request) {
            return Ok(hit);
        }

        let code = self.inner.detect_language(text).await?;
        self.store(&request, &code);
        Ok(code)
    }

    fn supported_languages(&self) -> &LanguageTable {
        self.inner.supported_languages()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::testing::ScriptedService;
    use tempfile::TempDir;

    fn cached(service: ScriptedService, temp_dir: &TempDir) -> CachedService<ScriptedService> {
        let cache = CacheManager::at(temp_dir.path().join("translations.db")).unwrap();
        CachedService::new(service, cache, "test#model".to_string())
    }

    #[tokio::test]
    async fn test_second_translate_served_from_cache() {
        let temp_dir = TempDir::new().unwrap();
        let service = cached(ScriptedService::new(), &temp_dir);

        let first = service.translate("namaste", "hi", "en").await.unwrap();
        let second = service.translate("namaste", "hi", "en").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(service.inner().translate_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_detection_cached_separately_from_translation() {
        let temp_dir = TempDir::new().unwrap();
        let service = cached(ScriptedService::new().detecting("kn"), &temp_dir);

        service.translate("idu", AUTO, "en").await.unwrap();
        assert_eq!(service.detect_language("idu").await.unwrap(), "kn");
        assert_eq!(service.detect_language("idu").await.unwrap(), "kn");

        assert_eq!(service.inner().detect_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let temp_dir = TempDir::new().unwrap();
        let service = cached(ScriptedService::new().failing_translation(), &temp_dir);

        assert!(service.translate("ek", AUTO, "en").await.is_err());
        assert!(service.translate("ek", AUTO, "en").await.is_err());

        assert_eq!(service.inner().translate_calls().len(), 2);
    }
}
