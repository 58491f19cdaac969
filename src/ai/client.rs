//! LLM API client module
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint (Groq, Ollama, ...).

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{error, info};

use super::prompt_builder::build_prompt;
use crate::core::config::{AppConfig, Backend};
use crate::core::models::SummaryResult;
use crate::core::traits::SummaryRequester;
use crate::errors::SummarizerError;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Convert typed prompt messages into the `messages` array of a chat-completions request.
#[must_use]
pub fn build_chat_messages(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|msg| {
            let role_str = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };

            match &msg.content {
                Content::Text(text) => Some(json!({ "role": role_str, "content": text })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}

/// Pull `choices[0].message.content` out of a chat-completions response.
#[must_use]
pub fn parse_completion_text(response: &Value) -> Option<String> {
    response
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(ToString::to_string)
}

/// LLM API client for generating summaries
pub struct LlmClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    model_name: String,
    backend: Backend,
}

impl LlmClient {
    /// The completion call has no client-side timeout; only the page fetch is bounded.
    #[must_use]
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        model_name: String,
        backend: Backend,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
            model_name,
            backend,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.llm_base_url.clone(),
            config.llm_api_key.clone(),
            config.llm_model.clone(),
            config.backend,
        )
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn build_request_body(&self, prompt: &[ChatCompletionMessage]) -> Value {
        json!({
            "model": self.model_name,
            "messages": build_chat_messages(prompt),
        })
    }

    fn api_key(&self) -> Result<&str, SummarizerError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| SummarizerError::Configuration(self.backend.credential_var().to_string()))
    }

    /// # Errors
    ///
    /// Returns `Configuration` if no credential is set (before any network call),
    /// and `Upstream` if the request fails, the endpoint answers non-2xx, or the
    /// response carries no completion text.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, SummarizerError> {
        let api_key = self.api_key()?;

        #[cfg(feature = "debug-logs")]
        info!("Using completion prompt:\n{:?}", prompt);

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
            .sum::<usize>();

        info!(
            model = %self.model_name,
            messages = prompt.len(),
            estimated_input_tokens,
            "Requesting completion"
        );

        let request_body = self.build_request_body(&prompt);

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(SummarizerError::completion)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body: {e}")
            });
            error!(%status, "Completion endpoint returned an error: {}", error_text);
            return Err(SummarizerError::completion(format!(
                "status {status}: {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| SummarizerError::completion(format!("malformed response: {e}")))?;

        parse_completion_text(&response_json)
            .ok_or_else(|| SummarizerError::completion("malformed response: no message content"))
    }
}

#[async_trait]
impl SummaryRequester for LlmClient {
    fn ensure_configured(&self) -> Result<(), SummarizerError> {
        self.api_key().map(|_| ())
    }

    async fn summarize(&self, content: &str) -> SummaryResult {
        self.generate_summary(build_prompt(content)).await
    }
}
