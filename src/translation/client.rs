use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

use super::language::LanguageTable;
use super::prompt::{DETECTION_PROMPT, build_translation_prompt};
use super::service::{AUTO, LanguageCode, ServiceError, TranslationService};
use super::sse_parser::sse_to_text_stream;

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

/// Translation backend speaking the OpenAI-compatible chat-completions API.
pub struct LlmService {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    languages: LanguageTable,
}

impl LlmService {
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        model: String,
        languages: LanguageTable,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            model,
            languages,
        }
    }

    /// Identifies the endpoint and model, for cache keys.
    pub fn backend_id(&self) -> String {
        format!("{}#{}", self.endpoint.trim_end_matches('/'), self.model)
    }

    /// Sends one system/user exchange and collects the streamed reply.
    async fn complete(&self, system: &str, user: &str) -> Result<String, ServiceError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(system),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(user),
                },
            ],
            stream: true,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        debug!(%url, model = %self.model, chars = user.chars().count(), "chat completion");
        let response = http_request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api { status, body });
        }

        let mut stream = std::pin::pin!(sse_to_text_stream(response.bytes_stream()));
        let mut reply = String::new();
        while let Some(chunk) = stream.next().await {
            reply.push_str(&chunk?);
        }

        if reply.trim().is_empty() {
            return Err(ServiceError::EmptyResponse);
        }
        Ok(reply)
    }

    fn language_name(&self, code: &str) -> Result<String, ServiceError> {
        self.languages
            .name(code)
            .map(str::to_string)
            .ok_or_else(|| ServiceError::InvalidLanguage(code.to_string()))
    }
}

#[async_trait]
impl TranslationService for LlmService {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ServiceError> {
        let source_name = if source == AUTO {
            None
        } else {
            Some(self.language_name(source)?)
        };
        let target_name = self.language_name(target)?;

        let system_prompt = build_translation_prompt(source_name.as_deref(), &target_name);
        let reply = self.complete(&system_prompt, text).await?;
        Ok(reply.trim().to_string())
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, ServiceError> {
        let reply = self.complete(DETECTION_PROMPT, text).await?;
        let answer = clean_detection_reply(&reply);

        self.languages
            .resolve(answer)
            .map(str::to_string)
            .ok_or_else(|| ServiceError::InvalidLanguage(answer.to_string()))
    }

    fn supported_languages(&self) -> &LanguageTable {
        &self.languages
    }
}

/// Strips the quoting and punctuation models like to wrap a bare code in.
fn clean_detection_reply(reply: &str) -> &str {
    reply
        .trim()
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '`' | '.') || c.is_whitespace())
}
