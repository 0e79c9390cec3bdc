//! Score request DTOs

use serde::Deserialize;

/// Submit score request
#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub participant_id: i64,
    pub judge_id: i64,
    pub round_id: i64,
    pub heat_id: Option<i64>,
    pub criterion_id: Option<i64>,
    #[serde(alias = "value")]
    pub score: f64,
}
