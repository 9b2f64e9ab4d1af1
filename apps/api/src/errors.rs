use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("OpenRouter error: {0}")]
    OpenRouter(#[source] LlmError),

    #[error("Gemini error: {0}")]
    Gemini(#[source] LlmError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                envelope("VALIDATION_ERROR", msg.clone()),
            ),
            // Relay failures keep the flat payloads the chat clients expect.
            AppError::OpenRouter(e) => {
                tracing::error!("OpenRouter error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Error from OpenRouter API" }),
                )
            }
            AppError::Gemini(e) => {
                tracing::error!("Gemini error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Error fetching reply from Gemini",
                        "details": e.to_string()
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

fn envelope(code: &str, message: String) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}
