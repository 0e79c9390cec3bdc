//! Score response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Score;

/// Stored score record
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub id: i64,
    pub participant_id: i64,
    pub judge_id: i64,
    pub round_id: i64,
    pub heat_id: Option<i64>,
    pub criterion_id: Option<i64>,
    pub score: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        Self {
            id: score.id,
            participant_id: score.participant_id,
            judge_id: score.judge_id,
            round_id: score.round_id,
            heat_id: score.heat_id,
            criterion_id: score.criterion_id,
            score: score.score,
            updated_at: score.updated_at,
        }
    }
}
