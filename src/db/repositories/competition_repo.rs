//! Competition, category and criterion repository

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};

use crate::{
    error::AppResult,
    models::{Category, CategoryType, Competition, Criterion},
};

/// Repository for competition database operations
pub struct CompetitionRepository;

impl CompetitionRepository {
    /// Create a new competition
    pub async fn create(
        pool: &PgPool,
        title: &str,
        date: Option<NaiveDate>,
        location: Option<&str>,
    ) -> AppResult<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            INSERT INTO competitions (title, date, location)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(date)
        .bind(location)
        .fetch_one(pool)
        .await?;

        Ok(competition)
    }

    /// Find competition by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Competition>> {
        let competition =
            sqlx::query_as::<_, Competition>(r#"SELECT * FROM competitions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(competition)
    }

    /// List competitions, newest date first
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Competition>> {
        let competitions = sqlx::query_as::<_, Competition>(
            r#"SELECT * FROM competitions ORDER BY date DESC NULLS LAST, id DESC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(competitions)
    }

    /// Insert a category row
    pub async fn create_category(
        conn: &mut PgConnection,
        competition_id: i64,
        name: &str,
        category_type: CategoryType,
    ) -> AppResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (competition_id, name, category_type)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(competition_id)
        .bind(name)
        .bind(category_type)
        .fetch_one(&mut *conn)
        .await?;

        Ok(category)
    }

    /// Insert criteria for a category in one statement
    pub async fn create_criteria(
        conn: &mut PgConnection,
        category_id: i64,
        names: &[String],
        scale_mins: &[f64],
        scale_maxs: &[f64],
    ) -> AppResult<Vec<Criterion>> {
        let criteria = sqlx::query_as::<_, Criterion>(
            r#"
            INSERT INTO criteria (category_id, name, scale_min, scale_max)
            SELECT $1, c.name, c.scale_min, c.scale_max
            FROM UNNEST($2::text[], $3::float8[], $4::float8[]) AS c(name, scale_min, scale_max)
            RETURNING *
            "#,
        )
        .bind(category_id)
        .bind(names)
        .bind(scale_mins)
        .bind(scale_maxs)
        .fetch_all(&mut *conn)
        .await?;

        Ok(criteria)
    }

    /// Find category by ID
    pub async fn find_category(pool: &PgPool, id: i64) -> AppResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(r#"SELECT * FROM categories WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(category)
    }

    /// List categories of a competition
    pub async fn list_categories(pool: &PgPool, competition_id: i64) -> AppResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"SELECT * FROM categories WHERE competition_id = $1 ORDER BY id"#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    /// List criteria of several categories at once
    pub async fn list_criteria(pool: &PgPool, category_ids: &[i64]) -> AppResult<Vec<Criterion>> {
        let criteria = sqlx::query_as::<_, Criterion>(
            r#"SELECT * FROM criteria WHERE category_id = ANY($1) ORDER BY id"#,
        )
        .bind(category_ids)
        .fetch_all(pool)
        .await?;

        Ok(criteria)
    }

    /// Find criterion by ID
    pub async fn find_criterion<'e, E>(executor: E, id: i64) -> AppResult<Option<Criterion>>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let criterion = sqlx::query_as::<_, Criterion>(r#"SELECT * FROM criteria WHERE id = $1"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(criterion)
    }
}
