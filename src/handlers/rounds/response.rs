//! Round response DTOs

use serde::Serialize;

use crate::{
    handlers::heats::response::HeatResponse,
    models::{Round, RoundType},
};

/// Round response
#[derive(Debug, Serialize)]
pub struct RoundResponse {
    pub id: i64,
    pub event_id: i64,
    pub category_id: i64,
    pub round_type: RoundType,
    pub stage_format: Option<String>,
    pub label: String,
}

impl From<Round> for RoundResponse {
    fn from(round: Round) -> Self {
        let label = round.label();
        Self {
            id: round.id,
            event_id: round.competition_id,
            category_id: round.category_id,
            round_type: round.round_type,
            stage_format: round.stage_format,
            label,
        }
    }
}

/// Result of an automatic distribution.
///
/// `heats_replaced` and `scores_orphaned` report what the call destroyed.
#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub status: &'static str,
    pub round_id: i64,
    pub heats_created: usize,
    pub heats_replaced: u64,
    pub scores_orphaned: i64,
    pub heats: Vec<HeatResponse>,
}
