//! User service

use sqlx::PgPool;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    handlers::users::{request::CreateUserRequest, response::UserResponse},
    utils::{sanitize_optional, sanitize_string},
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// List users
    pub async fn list_users(pool: &PgPool) -> AppResult<Vec<UserResponse>> {
        let users = UserRepository::list(pool).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Register a user
    pub async fn create_user(pool: &PgPool, payload: CreateUserRequest) -> AppResult<UserResponse> {
        let first_name = sanitize_string(&payload.first_name);
        let last_name = sanitize_string(&payload.last_name);
        let role = sanitize_string(&payload.role);
        if first_name.is_empty() || last_name.is_empty() || role.is_empty() {
            return Err(AppError::Validation(
                "Name and role cannot be blank".to_string(),
            ));
        }

        let email = sanitize_optional(payload.email.as_deref()).map(|e| e.to_lowercase());

        let user =
            UserRepository::create(pool, &first_name, &last_name, &role, email.as_deref()).await?;

        tracing::info!(user_id = user.id, role = %user.role, "User created");

        Ok(user.into())
    }
}
