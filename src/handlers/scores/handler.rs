//! Score handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{error::AppResult, services::ScoreService, state::AppState};

use super::{request::SubmitScoreRequest, response::ScoreResponse};

/// Record or correct a score
pub async fn submit_score(
    State(state): State<AppState>,
    Json(payload): Json<SubmitScoreRequest>,
) -> AppResult<Json<ScoreResponse>> {
    let score = ScoreService::submit_score(state.db(), payload).await?;
    Ok(Json(score))
}

/// Every score recorded for a heat
pub async fn list_heat_scores(
    State(state): State<AppState>,
    Path(heat_id): Path<i64>,
) -> AppResult<Json<Vec<ScoreResponse>>> {
    let scores = ScoreService::list_scores(state.db(), heat_id).await?;
    Ok(Json(scores))
}
