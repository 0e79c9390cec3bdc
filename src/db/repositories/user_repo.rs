//! User repository

use sqlx::PgPool;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        first_name: &str,
        last_name: &str,
        role: &str,
        email: Option<&str>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, role, email)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(role)
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// List users ordered by last name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(r#"SELECT * FROM users ORDER BY last_name, id"#)
            .fetch_all(pool)
            .await?;

        Ok(users)
    }

    /// Check if a user exists
    pub async fn exists<'e, E>(executor: E, id: i64) -> AppResult<bool>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)"#)
                .bind(id)
                .fetch_one(executor)
                .await?;

        Ok(exists)
    }
}
