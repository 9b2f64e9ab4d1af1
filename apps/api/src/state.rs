use crate::config::Config;
use crate::llm_client::{GeminiClient, LlmError, OpenRouterClient};

/// Shared application state injected into all route handlers via Axum extractors.
/// Provider clients are built once here rather than held as globals.
#[derive(Clone)]
pub struct AppState {
    pub openrouter: OpenRouterClient,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            openrouter: OpenRouterClient::new(
                config.openrouter_api_key.clone(),
                &config.openrouter_base_url,
                config.openrouter_referer.clone(),
            )?,
            gemini: GeminiClient::new(config.gemini_api_key.clone(), &config.gemini_base_url)?,
        })
    }
}
