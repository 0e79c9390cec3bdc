//! Heat and heat membership repository

use sqlx::{PgConnection, PgPool};

use crate::{
    error::AppResult,
    models::{Heat, HeatContextRow, HeatParticipant, HeatStatus, ParticipantHeatRow},
};

/// Repository for heat database operations
pub struct HeatRepository;

impl HeatRepository {
    /// Insert a heat with the given number
    pub async fn create(
        conn: &mut PgConnection,
        round_id: i64,
        heat_number: i32,
        status: HeatStatus,
    ) -> AppResult<Heat> {
        let heat = sqlx::query_as::<_, Heat>(
            r#"
            INSERT INTO heats (round_id, heat_number, status)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(round_id)
        .bind(heat_number)
        .bind(status)
        .fetch_one(&mut *conn)
        .await?;

        Ok(heat)
    }

    /// Add members to a heat
    pub async fn add_members(
        conn: &mut PgConnection,
        heat_id: i64,
        round_id: i64,
        participant_ids: &[i64],
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO heat_participants (heat_id, round_id, participant_id)
            SELECT $1, $2, UNNEST($3::bigint[])
            "#,
        )
        .bind(heat_id)
        .bind(round_id)
        .bind(participant_ids)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    /// Remove every member of a heat
    pub async fn clear_members(conn: &mut PgConnection, heat_id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM heat_participants WHERE heat_id = $1"#)
            .bind(heat_id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    /// Delete all heats of a round; memberships cascade.
    ///
    /// Returns the number of heats removed.
    pub async fn delete_by_round(conn: &mut PgConnection, round_id: i64) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM heats WHERE round_id = $1"#)
            .bind(round_id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete one heat; memberships cascade
    pub async fn delete(conn: &mut PgConnection, heat_id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM heats WHERE id = $1"#)
            .bind(heat_id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    /// Next free heat number in a round
    pub async fn next_heat_number(conn: &mut PgConnection, round_id: i64) -> AppResult<i32> {
        let next: i32 = sqlx::query_scalar(
            r#"SELECT COALESCE(MAX(heat_number), 0) + 1 FROM heats WHERE round_id = $1"#,
        )
        .bind(round_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(next)
    }

    /// Find heat by ID
    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> AppResult<Option<Heat>>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let heat = sqlx::query_as::<_, Heat>(r#"SELECT * FROM heats WHERE id = $1"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(heat)
    }

    /// Lock a heat row for the rest of the transaction
    pub async fn lock(conn: &mut PgConnection, id: i64) -> AppResult<Option<Heat>> {
        let heat = sqlx::query_as::<_, Heat>(r#"SELECT * FROM heats WHERE id = $1 FOR UPDATE"#)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(heat)
    }

    /// Set the status of a heat
    pub async fn update_status(
        conn: &mut PgConnection,
        id: i64,
        status: HeatStatus,
    ) -> AppResult<Heat> {
        let heat = sqlx::query_as::<_, Heat>(
            r#"UPDATE heats SET status = $2 WHERE id = $1 RETURNING *"#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&mut *conn)
        .await?;

        Ok(heat)
    }

    /// List heats of a round ordered by heat number
    pub async fn list_by_round(pool: &PgPool, round_id: i64) -> AppResult<Vec<Heat>> {
        let heats = sqlx::query_as::<_, Heat>(
            r#"SELECT * FROM heats WHERE round_id = $1 ORDER BY heat_number"#,
        )
        .bind(round_id)
        .fetch_all(pool)
        .await?;

        Ok(heats)
    }

    /// Members of several heats with display names, ordered by participant id
    pub async fn list_members<'e, E>(
        executor: E,
        heat_ids: &[i64],
    ) -> AppResult<Vec<HeatParticipant>>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let members = sqlx::query_as::<_, HeatParticipant>(
            r#"
            SELECT
                hp.heat_id,
                hp.participant_id,
                p.first_name || ' ' || p.last_name AS participant_name
            FROM heat_participants hp
            JOIN participants p ON p.id = hp.participant_id
            WHERE hp.heat_id = ANY($1)
            ORDER BY hp.heat_id, hp.participant_id
            "#,
        )
        .bind(heat_ids)
        .fetch_all(executor)
        .await?;

        Ok(members)
    }

    /// Members of `participant_ids` already placed in another heat of the round.
    ///
    /// Returns `(participant_id, heat_number)` pairs.
    pub async fn find_assigned_elsewhere(
        conn: &mut PgConnection,
        round_id: i64,
        exclude_heat_id: Option<i64>,
        participant_ids: &[i64],
    ) -> AppResult<Vec<(i64, i32)>> {
        let assigned = sqlx::query_as::<_, (i64, i32)>(
            r#"
            SELECT hp.participant_id, h.heat_number
            FROM heat_participants hp
            JOIN heats h ON h.id = hp.heat_id
            WHERE hp.round_id = $1
              AND ($2::bigint IS NULL OR hp.heat_id <> $2)
              AND hp.participant_id = ANY($3)
            ORDER BY hp.participant_id
            "#,
        )
        .bind(round_id)
        .bind(exclude_heat_id)
        .bind(participant_ids)
        .fetch_all(&mut *conn)
        .await?;

        Ok(assigned)
    }

    /// Check whether a participant is a member of a heat
    pub async fn is_member(
        conn: &mut PgConnection,
        heat_id: i64,
        participant_id: i64,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM heat_participants
                WHERE heat_id = $1 AND participant_id = $2
            )
            "#,
        )
        .bind(heat_id)
        .bind(participant_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(exists)
    }

    /// Whether the participant belongs to any heat
    pub async fn has_memberships(conn: &mut PgConnection, participant_id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM heat_participants WHERE participant_id = $1)"#,
        )
        .bind(participant_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(exists)
    }

    /// Heat joined with its round, category and competition labels
    pub async fn find_context(pool: &PgPool, id: i64) -> AppResult<Option<HeatContextRow>> {
        let context = sqlx::query_as::<_, HeatContextRow>(
            r#"
            SELECT
                h.id,
                h.heat_number,
                h.status,
                r.id AS round_id,
                r.round_type,
                r.stage_format,
                r.competition_id,
                e.title AS competition_title,
                r.category_id,
                c.name AS category_name
            FROM heats h
            JOIN rounds r ON r.id = h.round_id
            JOIN categories c ON c.id = r.category_id
            JOIN competitions e ON e.id = r.competition_id
            WHERE h.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(context)
    }

    /// Every heat a participant belongs to, across all rounds
    pub async fn list_for_participant(
        pool: &PgPool,
        participant_id: i64,
    ) -> AppResult<Vec<ParticipantHeatRow>> {
        let heats = sqlx::query_as::<_, ParticipantHeatRow>(
            r#"
            SELECT
                h.id,
                h.heat_number,
                h.status,
                r.id AS round_id,
                r.round_type,
                r.stage_format,
                c.name AS category_name,
                e.title AS event_title
            FROM heat_participants hp
            JOIN heats h ON h.id = hp.heat_id
            JOIN rounds r ON r.id = h.round_id
            JOIN categories c ON c.id = r.category_id
            JOIN competitions e ON e.id = r.competition_id
            WHERE hp.participant_id = $1
            ORDER BY r.id, h.heat_number
            "#,
        )
        .bind(participant_id)
        .fetch_all(pool)
        .await?;

        Ok(heats)
    }
}
