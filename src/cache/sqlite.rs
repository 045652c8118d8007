use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::paths;
use crate::translation::{DETECTION_PROMPT, TRANSLATION_PROMPT_TEMPLATE};

/// What a cached result answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKind {
    Translate,
    Detect,
}

impl CacheKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Detect => "detect",
        }
    }

    const fn prompt(self) -> &'static str {
        match self {
            Self::Translate => TRANSLATION_PROMPT_TEMPLATE,
            Self::Detect => DETECTION_PROMPT,
        }
    }
}

/// One cacheable backend request.
#[derive(Debug, Clone)]
pub struct CacheRequest<'a> {
    pub kind: CacheKind,
    pub text: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    /// Endpoint and model identity.
    pub backend: &'a str,
}

impl CacheRequest<'_> {
    /// Compute cache key for this request
    pub fn cache_key(&self) -> String {
        let cache_input = serde_json::json!({
            "kind": self.kind.as_str(),
            "text": self.text,
            "source": self.source,
            "target": self.target,
            "backend": self.backend,
            "prompt_hash": prompt_hash(self.kind.prompt()),
        });

        let mut hasher = Sha256::new();
        hasher.update(cache_input.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Hash of a prompt, so prompt changes invalidate old entries.
fn prompt_hash(prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    hex::encode(hasher.finalize())
}

pub struct CacheManager {
    db_path: PathBuf,
}

impl CacheManager {
    /// Opens the cache at `$XDG_CACHE_HOME/mixtl/translations.db`.
    pub fn new() -> Result<Self> {
        Self::at(paths::cache_dir()?.join("translations.db"))
    }

    /// Opens (and creates if needed) the cache database at `db_path`.
    pub fn at(db_path: PathBuf) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create cache directory: {}", parent.display())
            })?;
        }

        let manager = Self { db_path };
        manager.init_db()?;
        Ok(manager)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS translations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cache_key TEXT UNIQUE NOT NULL,
                kind TEXT NOT NULL,
                source_text TEXT NOT NULL,
                result TEXT NOT NULL,
                source_language TEXT NOT NULL,
                target_language TEXT NOT NULL,
                backend TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                accessed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create translations table")?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_cache_key ON translations(cache_key)",
            [],
        )
        .context("Failed to create index")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    pub fn get(&self, request: &CacheRequest<'_>) -> Result<Option<String>> {
        let cache_key = request.cache_key();
        let conn = self.connect()?;

        let result: Option<String> = conn
            .query_row(
                "SELECT result FROM translations WHERE cache_key = ?1",
                [&cache_key],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to read from cache")?;

        if result.is_some() {
            conn.execute(
                "UPDATE translations SET accessed_at = CURRENT_TIMESTAMP WHERE cache_key = ?1",
                [&cache_key],
            )?;
        }

        Ok(result)
    }

    pub fn put(&self, request: &CacheRequest<'_>, result: &str) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO translations
             (cache_key, kind, source_text, result, source_language, target_language, backend)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                request.cache_key(),
                request.kind.as_str(),
                request.text,
                result,
                request.source,
                request.target,
                request.backend,
            ],
        )
        .context("Failed to insert result into cache")?;

        Ok(())
    }

    /// Number of cached entries.
    pub fn len(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM translations", [], |row| {
            row.get(0)
        })?;
        Ok(count as usize)
    }
}
