use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use super::domain::JobInput;
use super::{JobScore, ValuationEngine};
use crate::error::AppError;

/// Router builder exposing HTTP endpoints for job evaluation.
pub fn valuation_router(engine: Arc<ValuationEngine>) -> Router {
    Router::new()
        .route("/api/v1/job-value/evaluate", post(evaluate_handler))
        .route("/api/v1/job-value/defaults", get(defaults_handler))
        .with_state(engine)
}

/// Rejected inputs surface through `AppError` as 422 responses.
pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<ValuationEngine>>,
    Json(input): Json<JobInput>,
) -> Result<Json<JobScore>, AppError> {
    let score = engine.score(&input)?;
    Ok(Json(score))
}

pub(crate) async fn defaults_handler() -> Json<JobInput> {
    Json(JobInput::default())
}
