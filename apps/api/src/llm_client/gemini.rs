//! Gemini generate-content relay.

use std::borrow::Cow;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompts::GEMINI_INSTRUCTION;
use super::{api_error, build_http_client, trim_base_url, LlmError};
use crate::models::chat::ChatMessage;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used for every Gemini call.
pub const MODEL: &str = "gemini-pro";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: Cow<'a, str>,
}

impl<'a> Content<'a> {
    fn text(role: &'a str, text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

/// Gemini only knows "user" and "model"; anything that isn't the user is the model.
fn provider_role(message: &ChatMessage) -> &'static str {
    if message.is_user() {
        "user"
    } else {
        "model"
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: &str) -> Result<Self, LlmError> {
        Ok(Self {
            client: build_http_client()?,
            api_key,
            base_url: trim_base_url(base_url),
        })
    }

    /// Sends the fixed counselor instruction followed by the role-mapped history
    /// and returns the reply text.
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let contents = std::iter::once(Content::text("user", GEMINI_INSTRUCTION))
            .chain(
                messages
                    .iter()
                    .map(|m| Content::text(provider_role(m), m.text())),
            )
            .collect();
        let request_body = GenerateRequest { contents };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, MODEL
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body = response.bytes().await?;
        let generated: GenerateResponse = serde_json::from_slice(&body)?;

        debug!(
            "Gemini call succeeded: {} message(s) relayed, {} candidate(s) returned",
            messages.len(),
            generated.candidates.len()
        );

        generated.text().ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/models/gemini-pro:generateContent";

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new("test_key".to_string(), &server.uri()).unwrap()
    }

    #[test]
    fn test_provider_role_mapping() {
        assert_eq!(provider_role(&ChatMessage::new("user", "hi")), "user");
        assert_eq!(provider_role(&ChatMessage::new("assistant", "hi")), "model");
        assert_eq!(provider_role(&ChatMessage::new("system", "hi")), "model");
        assert_eq!(provider_role(&ChatMessage::new("User", "hi")), "model");
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Hello, " }, { "text": "student." }] } },
                { "content": { "role": "model", "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Hello, student."));
    }

    #[test]
    fn test_response_text_none_when_blocked() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();
        assert_eq!(response.text(), None);
    }

    #[tokio::test]
    async fn test_chat_maps_roles_and_prepends_instruction() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test_key"))
            .and(body_json(json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": GEMINI_INSTRUCTION }] },
                    { "role": "user", "parts": [{ "text": "I like drawing." }] },
                    { "role": "model", "parts": [{ "text": "Try UI design." }] },
                    { "role": "user", "parts": [{ "text": "Where do I start?" }] }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "Learn Figma first." }] },
                    "finishReason": "STOP"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server)
            .chat(&[
                ChatMessage::new("user", "I like drawing."),
                ChatMessage::new("assistant", "Try UI design."),
                ChatMessage::new("user", "Where do I start?"),
            ])
            .await
            .unwrap();

        assert_eq!(reply, "Learn Figma first.");
    }

    #[tokio::test]
    async fn test_chat_surfaces_provider_error_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).chat(&[]).await.unwrap_err();
        assert_eq!(err.to_string(), "API error (status 400): API key not valid.");
    }

    #[tokio::test]
    async fn test_chat_malformed_body_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).chat(&[]).await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_chat_sends_text_of_multipart_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_json(json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": GEMINI_INSTRUCTION }] },
                    { "role": "user", "parts": [{ "text": "Hello there" }] }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "Hi!" }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let message: ChatMessage = serde_json::from_value(json!({
            "role": "user",
            "content": [{ "type": "text", "text": "Hello" }, { "type": "text", "text": " there" }]
        }))
        .unwrap();

        let reply = client_for(&server).chat(&[message]).await.unwrap();
        assert_eq!(reply, "Hi!");
    }

    #[tokio::test]
    async fn test_chat_without_candidates_is_empty_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server).chat(&[]).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent), "got {err:?}");
    }
}
