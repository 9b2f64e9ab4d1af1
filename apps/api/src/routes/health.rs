use axum::Json;
use serde_json::{json, Value};

pub const LIVENESS_TEXT: &str = "Career AI Backend Running (Gemini + OpenRouter)";

/// GET /
/// Plain-text liveness banner.
pub async fn root_handler() -> &'static str {
    LIVENESS_TEXT
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-api"
    }))
}
