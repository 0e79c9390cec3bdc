//! Heat handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppResult,
    services::{HeatService, LifecycleService, ScoreService},
    state::AppState,
};

use super::{
    request::UpdateHeatStatusRequest,
    response::{HeatDetailResponse, HeatResultsResponse, HeatStatusResponse},
};

/// Get heat detail with participants, criteria and parent labels
pub async fn get_heat(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<HeatDetailResponse>> {
    let heat = HeatService::get_heat_detail(state.db(), id).await?;
    Ok(Json(heat))
}

/// Move a heat forward in its lifecycle
pub async fn update_heat_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateHeatStatusRequest>,
) -> AppResult<Json<HeatStatusResponse>> {
    let status = LifecycleService::set_status(state.db(), id, payload.status).await?;
    Ok(Json(status))
}

/// Ranked score totals of a heat
pub async fn get_heat_results(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<HeatResultsResponse>> {
    let results = ScoreService::heat_results(state.db(), id).await?;
    Ok(Json(results))
}
