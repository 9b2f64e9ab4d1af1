use anyhow::{Context, Result};

use crate::llm_client::{gemini, openrouter};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_REFERER: &str = "http://localhost:3000";

/// Application configuration loaded from environment variables.
/// Startup fails if a provider API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub openrouter_base_url: String,
    pub openrouter_referer: String,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            openrouter_api_key: require("OPENROUTER_API_KEY")?,
            openrouter_base_url: or_default("OPENROUTER_BASE_URL", openrouter::DEFAULT_BASE_URL),
            openrouter_referer: or_default("OPENROUTER_REFERER", DEFAULT_REFERER),
            gemini_api_key: require("GEMINI_API_KEY")?,
            gemini_base_url: or_default("GEMINI_BASE_URL", gemini::DEFAULT_BASE_URL),
            port,
            rust_log: or_default("RUST_LOG", "info"),
        })
    }
}
