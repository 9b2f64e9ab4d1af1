/// LLM clients — the only modules in the service that talk to external chat providers.
///
/// Two providers are relayed: OpenRouter (chat-completions) and Gemini (generate-content).
/// Each client is constructed once at startup and injected through `AppState`;
/// base URLs are configurable so tests can point them at a stub server.
///
/// Calls are single-shot: a provider failure is surfaced as `LlmError` and never retried.
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

pub mod gemini;
pub mod openrouter;
pub mod prompts;

pub use gemini::GeminiClient;
pub use openrouter::OpenRouterClient;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Both providers wrap failures as `{"error": {"message": ...}}`.
#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

fn build_http_client() -> Result<Client, LlmError> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Converts a non-success provider response into `LlmError::Api`,
/// preferring the provider's own error message over the raw body.
async fn api_error(response: reqwest::Response) -> LlmError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ProviderError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    LlmError::Api { status, message }
}

fn trim_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_base_url_strips_trailing_slashes() {
        assert_eq!(
            trim_base_url("https://openrouter.ai/api/v1/"),
            "https://openrouter.ai/api/v1"
        );
        assert_eq!(trim_base_url("http://127.0.0.1:9000"), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_provider_error_parses_nested_message() {
        let body = r#"{"error": {"message": "No auth credentials found", "code": 401}}"#;
        let parsed: ProviderError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "No auth credentials found");
    }
}
