//! Round repository

use sqlx::{PgConnection, PgPool};

use crate::{
    error::AppResult,
    models::{Round, RoundType},
};

/// Repository for round database operations
pub struct RoundRepository;

impl RoundRepository {
    /// Insert a round unless its natural key already exists.
    ///
    /// Returns the round and whether this call created it.
    pub async fn find_or_create(
        conn: &mut PgConnection,
        competition_id: i64,
        category_id: i64,
        round_type: RoundType,
        stage_format: Option<&str>,
    ) -> AppResult<(Round, bool)> {
        let inserted = sqlx::query_as::<_, Round>(
            r#"
            INSERT INTO rounds (competition_id, category_id, round_type, stage_format)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT ON CONSTRAINT uq_round_natural_key DO NOTHING
            RETURNING *
            "#,
        )
        .bind(competition_id)
        .bind(category_id)
        .bind(round_type)
        .bind(stage_format)
        .fetch_optional(&mut *conn)
        .await?;

        if let Some(round) = inserted {
            return Ok((round, true));
        }

        let existing = sqlx::query_as::<_, Round>(
            r#"
            SELECT * FROM rounds
            WHERE category_id = $1
              AND round_type = $2
              AND stage_format IS NOT DISTINCT FROM $3
            "#,
        )
        .bind(category_id)
        .bind(round_type)
        .bind(stage_format)
        .fetch_one(&mut *conn)
        .await?;

        Ok((existing, false))
    }

    /// Find round by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Round>> {
        let round = sqlx::query_as::<_, Round>(r#"SELECT * FROM rounds WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(round)
    }

    /// Lock a round row for the rest of the transaction.
    ///
    /// Every heat mutation of the round serializes on this lock.
    pub async fn lock(conn: &mut PgConnection, id: i64) -> AppResult<Option<Round>> {
        let round = sqlx::query_as::<_, Round>(r#"SELECT * FROM rounds WHERE id = $1 FOR UPDATE"#)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(round)
    }

    /// Share-lock a round row for the rest of the transaction.
    ///
    /// Score writes take this lock so they never interleave with a heat
    /// mutation holding the round's exclusive lock.
    pub async fn lock_shared(conn: &mut PgConnection, id: i64) -> AppResult<Option<Round>> {
        let round = sqlx::query_as::<_, Round>(r#"SELECT * FROM rounds WHERE id = $1 FOR SHARE"#)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(round)
    }

    /// List rounds of a competition
    pub async fn list_by_competition(pool: &PgPool, competition_id: i64) -> AppResult<Vec<Round>> {
        let rounds = sqlx::query_as::<_, Round>(
            r#"
            SELECT * FROM rounds
            WHERE competition_id = $1
            ORDER BY stage_format NULLS FIRST, round_type, id
            "#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(rounds)
    }
}
