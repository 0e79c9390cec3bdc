//! Round handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::heats::response::HeatResponse,
    services::{HeatService, RoundService},
    state::AppState,
};

use super::{
    request::{CreateRoundRequest, DistributeRequest, ListRoundsQuery, ManualHeatRequest},
    response::{DistributionResponse, RoundResponse},
};

/// List rounds of a competition
pub async fn list_rounds(
    State(state): State<AppState>,
    Query(query): Query<ListRoundsQuery>,
) -> AppResult<Json<Vec<RoundResponse>>> {
    let rounds = RoundService::list_rounds(state.db(), query.event_id).await?;
    Ok(Json(rounds))
}

/// Find or create a round by its natural key
pub async fn create_round(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoundRequest>,
) -> AppResult<(StatusCode, Json<RoundResponse>)> {
    payload.validate()?;

    let (round, created) = RoundService::find_or_create_round(state.db(), payload).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(round)))
}

/// Get a round
pub async fn get_round(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<RoundResponse>> {
    let round = RoundService::get_round(state.db(), id).await?;
    Ok(Json(round))
}

/// Replace every heat of a round with a fresh distribution
pub async fn distribute_heats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DistributeRequest>,
) -> AppResult<Json<DistributionResponse>> {
    payload.validate()?;

    let options = state.config().allocation.clone().into();
    let summary = HeatService::distribute(state.db(), &options, id, payload.max_in_heat).await?;

    Ok(Json(summary))
}

/// List heats of a round
pub async fn list_heats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<HeatResponse>>> {
    let heats = HeatService::list_heats(state.db(), id).await?;
    Ok(Json(heats))
}

/// Append a manually composed heat
pub async fn create_manual_heat(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ManualHeatRequest>,
) -> AppResult<(StatusCode, Json<HeatResponse>)> {
    payload.validate()?;

    let heat = HeatService::create_manual_heat(state.db(), id, &payload.participant_ids).await?;
    Ok((StatusCode::CREATED, Json(heat)))
}

/// Replace the membership of a heat
pub async fn update_manual_heat(
    State(state): State<AppState>,
    Path((id, heat_id)): Path<(i64, i64)>,
    Json(payload): Json<ManualHeatRequest>,
) -> AppResult<Json<HeatResponse>> {
    payload.validate()?;

    let heat =
        HeatService::update_manual_heat(state.db(), id, heat_id, &payload.participant_ids).await?;
    Ok(Json(heat))
}

/// Delete a heat that has not finished
pub async fn delete_heat(
    State(state): State<AppState>,
    Path((id, heat_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    HeatService::delete_heat(state.db(), id, heat_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
