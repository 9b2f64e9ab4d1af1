//! Axum route handler for the questionnaire analysis API.

use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;
use tracing::debug;

use crate::assessment::classifier::{classify, Assessment};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub answers: Vec<String>,
}

/// POST /api/analyze
pub async fn handle_analyze(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Assessment>, AppError> {
    let Json(req) = payload?;
    let assessment = classify(&req.answers);
    debug!(
        "Classified {} answer(s), {} matched: {:?} -> {}",
        req.answers.len(),
        assessment.score.total(),
        assessment.score,
        assessment.recommendation.label()
    );
    Ok(Json(assessment))
}
