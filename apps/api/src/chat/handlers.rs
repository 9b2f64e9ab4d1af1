//! Axum route handlers for the chat relays.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::chat::{ChatReply, ChatRequest};
use crate::state::AppState;

/// POST /api/chat/openrouter
pub async fn handle_openrouter_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(req) = payload?;
    let reply = state
        .openrouter
        .chat(&req.messages)
        .await
        .map_err(AppError::OpenRouter)?;
    Ok(Json(reply))
}

/// POST /api/chat/gemini
pub async fn handle_gemini_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(req) = payload?;
    let content = state
        .gemini
        .chat(&req.messages)
        .await
        .map_err(AppError::Gemini)?;
    Ok(Json(ChatReply::assistant(content)))
}
