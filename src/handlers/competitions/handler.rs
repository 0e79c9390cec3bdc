//! Competition handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{error::AppResult, services::CompetitionService, state::AppState};

use super::{
    request::{CreateCategoryRequest, CreateCompetitionRequest},
    response::{CategoryResponse, CompetitionResponse},
};

/// List all competitions with their categories
pub async fn list_competitions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CompetitionResponse>>> {
    let competitions = CompetitionService::list_competitions(state.db()).await?;
    Ok(Json(competitions))
}

/// Create a new competition
pub async fn create_competition(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompetitionRequest>,
) -> AppResult<(StatusCode, Json<CompetitionResponse>)> {
    payload.validate()?;

    let competition = CompetitionService::create_competition(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(competition)))
}

/// Get a competition with nested categories
pub async fn get_competition(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CompetitionResponse>> {
    let competition = CompetitionService::get_competition(state.db(), id).await?;
    Ok(Json(competition))
}

/// Create a category under a competition
pub async fn create_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    payload.validate()?;

    let category = CompetitionService::create_category(state.db(), id, payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
