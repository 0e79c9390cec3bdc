//! Score model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A judge's mark for one participant on one criterion.
///
/// `(participant_id, judge_id, round_id, criterion_id, heat_id)` is unique;
/// resubmitting the same key overwrites `score`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Score {
    pub id: i64,
    pub participant_id: i64,
    pub judge_id: i64,
    pub round_id: i64,
    pub heat_id: Option<i64>,
    pub criterion_id: Option<i64>,
    pub score: f64,
    pub updated_at: DateTime<Utc>,
}

/// Score total of one heat member, before ranking
#[derive(Debug, Clone, FromRow)]
pub struct ResultTotalRow {
    pub participant_id: i64,
    pub participant_name: String,
    pub total_score: f64,
    pub judge_count: i64,
}

/// A score recorded for the participant.
///
/// `orphaned` marks scores whose heat was removed by a redistribution.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ParticipantScoreRow {
    pub id: i64,
    pub score: f64,
    pub judge_id: i64,
    pub judge_name: String,
    pub criterion_id: Option<i64>,
    pub criterion_name: Option<String>,
    pub round_id: i64,
    pub heat_id: Option<i64>,
    pub orphaned: bool,
}
