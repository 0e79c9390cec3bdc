//! User handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{error::AppResult, services::UserService, state::AppState};

use super::{request::CreateUserRequest, response::UserResponse};

/// List users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserService::list_users(state.db()).await?;
    Ok(Json(users))
}

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    payload.validate()?;

    let user = UserService::create_user(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
