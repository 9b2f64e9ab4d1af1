pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers::handle_analyze;
use crate::chat::handlers::{handle_gemini_chat, handle_openrouter_chat};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Questionnaire
        .route("/api/analyze", post(handle_analyze))
        // Chat relays
        .route("/api/chat/openrouter", post(handle_openrouter_chat))
        .route("/api/chat/gemini", post(handle_gemini_chat))
        .with_state(state)
}
