//! Romanized-to-native-script conversion.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use super::service::{ServiceError, Transliterator};

/// Default Google Input Tools endpoint.
pub const INPUT_TOOLS_ENDPOINT: &str = "https://inputtools.google.com/request";

/// Optional transliteration with pass-through degradation.
///
/// Without a backend, or when the backend fails, text is returned as given.
#[derive(Default)]
pub struct Transliteration {
    backend: Option<Box<dyn Transliterator>>,
}

impl Transliteration {
    pub fn new(backend: impl Transliterator + 'static) -> Self {
        Self {
            backend: Some(Box::new(backend)),
        }
    }

    /// No backend: every call passes text through.
    pub const fn unavailable() -> Self {
        Self { backend: None }
    }

    pub const fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Converts `text` to the native script of `language`, or returns it unchanged.
    pub async fn transliterate(&self, text: &str, language: &str) -> String {
        let Some(backend) = &self.backend else {
            return text.to_string();
        };

        match backend.transliterate(text, language).await {
            Ok(native) => {
                debug!(text, %native, language, "transliterated");
                native
            }
            Err(e) => {
                warn!(error = %e, language, "transliteration failed, keeping romanized text");
                text.to_string()
            }
        }
    }
}

/// Transliterator backed by the Google Input Tools HTTP API.
pub struct InputToolsClient {
    client: Client,
    endpoint: String,
}

impl InputToolsClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    async fn transliterate_word(&self, word: &str, language: &str) -> Result<String, ServiceError> {
        let itc = format!("{language}-t-i0-und");
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("text", word),
                ("itc", itc.as_str()),
                ("num", "1"),
                ("cp", "0"),
                ("cs", "1"),
                ("ie", "utf-8"),
                ("oe", "utf-8"),
            ],
        )
        .map_err(|_| ServiceError::InvalidEndpoint(self.endpoint.clone()))?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api { status, body });
        }

        let body = response.text().await?;
        parse_input_tools_response(&body).ok_or(ServiceError::EmptyResponse)
    }
}

#[async_trait]
impl Transliterator for InputToolsClient {
    async fn transliterate(&self, text: &str, language: &str) -> Result<String, ServiceError> {
        let mut words = Vec::new();
        for word in text.split_whitespace() {
            // the API only understands letters; keep punctuation and digits around them
            let start = word.find(|c: char| c.is_ascii_alphabetic());
            let end = word.rfind(|c: char| c.is_ascii_alphabetic());
            let (Some(start), Some(end)) = (start, end) else {
                words.push(word.to_string());
                continue;
            };
            let core = &word[start..=end];
            let native = self.transliterate_word(core, language).await?;
            words.push(format!("{}{native}{}", &word[..start], &word[end + 1..]));
        }
        Ok(words.join(" "))
    }
}

/// Extracts the first candidate from an Input Tools response.
///
/// The response looks like `["SUCCESS",[["namaste",["नमस्ते"],[],{}]]]`.
fn parse_input_tools_response(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    if value.get(0)?.as_str()? != "SUCCESS" {
        return None;
    }

    let candidate = value.get(1)?.get(0)?.get(1)?.get(0)?.as_str()?;
    if candidate.is_empty() {
        None
    } else {
        Some(candidate.to_string())
    }
}
