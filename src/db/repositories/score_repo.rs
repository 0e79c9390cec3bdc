//! Score repository

use sqlx::{PgConnection, PgPool};

use crate::{
    error::AppResult,
    models::{ParticipantScoreRow, ResultTotalRow, Score},
};

/// Repository for score database operations
pub struct ScoreRepository;

impl ScoreRepository {
    /// Insert or overwrite the score for its natural key.
    ///
    /// A single statement, so concurrent writes to the same key resolve to
    /// the last committed value without a read-modify-write window.
    pub async fn upsert(
        conn: &mut PgConnection,
        participant_id: i64,
        judge_id: i64,
        round_id: i64,
        heat_id: Option<i64>,
        criterion_id: Option<i64>,
        value: f64,
    ) -> AppResult<Score> {
        let score = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (participant_id, judge_id, round_id, heat_id, criterion_id, score)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT ON CONSTRAINT uq_score_key
            DO UPDATE SET score = EXCLUDED.score, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(participant_id)
        .bind(judge_id)
        .bind(round_id)
        .bind(heat_id)
        .bind(criterion_id)
        .bind(value)
        .fetch_one(&mut *conn)
        .await?;

        Ok(score)
    }

    /// All scores recorded against a heat
    pub async fn list_by_heat(pool: &PgPool, heat_id: i64) -> AppResult<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(
            r#"
            SELECT * FROM scores
            WHERE heat_id = $1
            ORDER BY participant_id, criterion_id, judge_id
            "#,
        )
        .bind(heat_id)
        .fetch_all(pool)
        .await?;

        Ok(scores)
    }

    /// Number of scores pointing at any heat of a round
    pub async fn count_for_round_heats(conn: &mut PgConnection, round_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM scores
            WHERE heat_id IN (SELECT id FROM heats WHERE round_id = $1)
            "#,
        )
        .bind(round_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(count)
    }

    /// Every score of a participant with judge and criterion labels
    pub async fn list_by_participant(
        pool: &PgPool,
        participant_id: i64,
    ) -> AppResult<Vec<ParticipantScoreRow>> {
        let scores = sqlx::query_as::<_, ParticipantScoreRow>(
            r#"
            SELECT
                s.id,
                s.score,
                s.judge_id,
                u.first_name || ' ' || u.last_name AS judge_name,
                s.criterion_id,
                cr.name AS criterion_name,
                s.round_id,
                s.heat_id,
                (s.heat_id IS NOT NULL AND h.id IS NULL) AS orphaned
            FROM scores s
            JOIN users u ON u.id = s.judge_id
            LEFT JOIN criteria cr ON cr.id = s.criterion_id
            LEFT JOIN heats h ON h.id = s.heat_id
            WHERE s.participant_id = $1
            ORDER BY s.round_id, s.heat_id, s.criterion_id, s.judge_id
            "#,
        )
        .bind(participant_id)
        .fetch_all(pool)
        .await?;

        Ok(scores)
    }

    /// Per-member score totals of a heat; members without scores total zero
    pub async fn totals_for_heat(pool: &PgPool, heat_id: i64) -> AppResult<Vec<ResultTotalRow>> {
        let totals = sqlx::query_as::<_, ResultTotalRow>(
            r#"
            SELECT
                hp.participant_id,
                p.first_name || ' ' || p.last_name AS participant_name,
                COALESCE(SUM(s.score), 0)::float8 AS total_score,
                COUNT(DISTINCT s.judge_id) AS judge_count
            FROM heat_participants hp
            JOIN participants p ON p.id = hp.participant_id
            LEFT JOIN scores s
                ON s.heat_id = hp.heat_id AND s.participant_id = hp.participant_id
            WHERE hp.heat_id = $1
            GROUP BY hp.participant_id, p.first_name, p.last_name
            ORDER BY hp.participant_id
            "#,
        )
        .bind(heat_id)
        .fetch_all(pool)
        .await?;

        Ok(totals)
    }
}
