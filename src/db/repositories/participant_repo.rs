//! Participant repository

use sqlx::{PgConnection, PgPool};

use crate::{
    allocation::RosterEntry,
    error::AppResult,
    models::{Gender, Participant, ParticipantProfileRow},
};

/// Repository for participant database operations
pub struct ParticipantRepository;

impl ParticipantRepository {
    /// Create a new participant
    pub async fn create(
        pool: &PgPool,
        competition_id: i64,
        category_id: i64,
        first_name: &str,
        last_name: &str,
        number: Option<i32>,
        role: Option<&str>,
        gender: Option<Gender>,
    ) -> AppResult<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (
                competition_id, category_id, first_name, last_name, number, role, gender
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(competition_id)
        .bind(category_id)
        .bind(first_name)
        .bind(last_name)
        .bind(number)
        .bind(role)
        .bind(gender)
        .fetch_one(pool)
        .await?;

        Ok(participant)
    }

    /// Find participant by ID
    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> AppResult<Option<Participant>>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let participant =
            sqlx::query_as::<_, Participant>(r#"SELECT * FROM participants WHERE id = $1"#)
                .bind(id)
                .fetch_optional(executor)
                .await?;

        Ok(participant)
    }

    /// Lock a participant row for the rest of the transaction
    pub async fn lock(conn: &mut PgConnection, id: i64) -> AppResult<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"SELECT * FROM participants WHERE id = $1 FOR UPDATE"#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(participant)
    }

    /// Find several participants by ID, share-locking them.
    ///
    /// The lock keeps their category fixed while they are placed into heats.
    pub async fn find_many<'e, E>(executor: E, ids: &[i64]) -> AppResult<Vec<Participant>>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let participants = sqlx::query_as::<_, Participant>(
            r#"SELECT * FROM participants WHERE id = ANY($1) ORDER BY id FOR SHARE"#,
        )
        .bind(ids)
        .fetch_all(executor)
        .await?;

        Ok(participants)
    }

    /// Update participant; `None` keeps the current value
    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        first_name: Option<&str>,
        last_name: Option<&str>,
        number: Option<i32>,
        role: Option<&str>,
        gender: Option<Gender>,
        category_id: Option<i64>,
    ) -> AppResult<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE participants
            SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                number = COALESCE($4, number),
                role = COALESCE($5, role),
                gender = COALESCE($6, gender),
                category_id = COALESCE($7, category_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(number)
        .bind(role)
        .bind(gender)
        .bind(category_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(participant)
    }

    /// List participants of a competition, optionally narrowed to one category.
    ///
    /// Ordered by bib number (unnumbered first), then last name.
    pub async fn list(
        pool: &PgPool,
        competition_id: i64,
        category_id: Option<i64>,
    ) -> AppResult<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT * FROM participants
            WHERE competition_id = $1
              AND ($2::bigint IS NULL OR category_id = $2)
            ORDER BY number ASC NULLS FIRST, last_name, id
            "#,
        )
        .bind(competition_id)
        .bind(category_id)
        .fetch_all(pool)
        .await?;

        Ok(participants)
    }

    /// Allocation roster of a category in ascending id order.
    ///
    /// Rows are share-locked so no member changes category mid-allocation.
    pub async fn roster<'e, E>(executor: E, category_id: i64) -> AppResult<Vec<RosterEntry>>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let rows = sqlx::query_as::<_, (i64, Option<Gender>)>(
            r#"SELECT id, gender FROM participants WHERE category_id = $1 ORDER BY id FOR SHARE"#,
        )
        .bind(category_id)
        .fetch_all(executor)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(participant_id, gender)| RosterEntry {
                participant_id,
                gender,
            })
            .collect())
    }

    /// Participant joined with its category and competition
    pub async fn find_profile(pool: &PgPool, id: i64) -> AppResult<Option<ParticipantProfileRow>> {
        let profile = sqlx::query_as::<_, ParticipantProfileRow>(
            r#"
            SELECT
                p.id,
                p.first_name,
                p.last_name,
                p.number,
                p.role,
                p.gender,
                p.category_id,
                c.name AS category_name,
                c.category_type,
                p.competition_id,
                e.title AS competition_title,
                e.date AS competition_date,
                e.location AS competition_location
            FROM participants p
            JOIN categories c ON c.id = p.category_id
            JOIN competitions e ON e.id = p.competition_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }
}
