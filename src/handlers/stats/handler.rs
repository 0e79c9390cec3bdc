//! Statistics handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{error::AppResult, services::StatsService, state::AppState};

use super::response::ParticipantStatsResponse;

/// Heats and scores of one participant
pub async fn get_participant_stats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ParticipantStatsResponse>> {
    let stats = StatsService::participant_stats(state.db(), id).await?;
    Ok(Json(stats))
}
