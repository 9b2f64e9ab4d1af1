//! OpenRouter chat-completions relay.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::prompts::OPENROUTER_SYSTEM_PROMPT;
use super::{api_error, build_http_client, trim_base_url, LlmError};
use crate::models::chat::ChatMessage;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// Model used for every OpenRouter call.
pub const MODEL: &str = "mistralai/mistral-7b-instruct";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<&'a ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

/// The message object is kept as raw JSON so it reaches the caller unchanged.
#[derive(Debug, Deserialize)]
struct Choice {
    message: Value,
}

#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    base_url: String,
    referer: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, base_url: &str, referer: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: build_http_client()?,
            api_key,
            base_url: trim_base_url(base_url),
            referer,
        })
    }

    /// Sends the conversation behind the fixed counselor system prompt and returns
    /// the first choice's message object verbatim.
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<Value, LlmError> {
        let system = ChatMessage::new("system", OPENROUTER_SYSTEM_PROMPT);
        let request_body = CompletionRequest {
            model: MODEL,
            messages: std::iter::once(&system).chain(messages).collect(),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referer)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body = response.bytes().await?;
        let completion: CompletionResponse = serde_json::from_slice(&body)?;

        debug!(
            "OpenRouter call succeeded: {} message(s) relayed, {} choice(s) returned",
            messages.len(),
            completion.choices.len()
        );

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or(LlmError::EmptyContent)
    }
}
