//! Participant handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{error::AppResult, services::ParticipantService, state::AppState};

use super::{
    request::{CreateParticipantRequest, ListParticipantsQuery, UpdateParticipantRequest},
    response::ParticipantResponse,
};

/// List participants of a competition
pub async fn list_participants(
    State(state): State<AppState>,
    Path(competition_id): Path<i64>,
    Query(query): Query<ListParticipantsQuery>,
) -> AppResult<Json<Vec<ParticipantResponse>>> {
    let participants =
        ParticipantService::list_participants(state.db(), competition_id, query.category_id)
            .await?;
    Ok(Json(participants))
}

/// Register a participant
pub async fn create_participant(
    State(state): State<AppState>,
    Path(competition_id): Path<i64>,
    Json(payload): Json<CreateParticipantRequest>,
) -> AppResult<(StatusCode, Json<ParticipantResponse>)> {
    payload.validate()?;

    let participant =
        ParticipantService::create_participant(state.db(), competition_id, payload).await?;
    Ok((StatusCode::CREATED, Json(participant)))
}

/// Update a participant
pub async fn update_participant(
    State(state): State<AppState>,
    Path((competition_id, participant_id)): Path<(i64, i64)>,
    Json(payload): Json<UpdateParticipantRequest>,
) -> AppResult<Json<ParticipantResponse>> {
    payload.validate()?;

    let participant = ParticipantService::update_participant(
        state.db(),
        competition_id,
        participant_id,
        payload,
    )
    .await?;
    Ok(Json(participant))
}
