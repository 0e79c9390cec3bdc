//! Heat response DTOs

use serde::Serialize;

use crate::{
    handlers::competitions::response::CriterionResponse,
    models::{Heat, HeatContextRow, HeatParticipant, HeatStatus, RoundType},
};

/// Heat member
#[derive(Debug, Clone, Serialize)]
pub struct HeatParticipantResponse {
    pub participant_id: i64,
    pub participant_name: String,
}

impl From<HeatParticipant> for HeatParticipantResponse {
    fn from(member: HeatParticipant) -> Self {
        Self {
            participant_id: member.participant_id,
            participant_name: member.participant_name,
        }
    }
}

/// Heat with its members
#[derive(Debug, Clone, Serialize)]
pub struct HeatResponse {
    pub id: i64,
    pub heat_number: i32,
    pub status: HeatStatus,
    pub participants: Vec<HeatParticipantResponse>,
}

impl HeatResponse {
    pub fn new(heat: Heat, participants: Vec<HeatParticipantResponse>) -> Self {
        Self {
            id: heat.id,
            heat_number: heat.heat_number,
            status: heat.status,
            participants,
        }
    }
}

/// Full heat detail for the judging screen
#[derive(Debug, Serialize)]
pub struct HeatDetailResponse {
    pub id: i64,
    pub heat_number: i32,
    pub status: HeatStatus,
    pub participants: Vec<HeatParticipantResponse>,
    pub round_id: i64,
    pub round_type: RoundType,
    pub stage_format: Option<String>,
    pub event_id: i64,
    pub event_title: String,
    pub category_id: i64,
    pub category_name: String,
    pub criteria: Vec<CriterionResponse>,
}

impl HeatDetailResponse {
    pub fn new(
        context: HeatContextRow,
        participants: Vec<HeatParticipantResponse>,
        criteria: Vec<CriterionResponse>,
    ) -> Self {
        Self {
            id: context.id,
            heat_number: context.heat_number,
            status: context.status,
            participants,
            round_id: context.round_id,
            round_type: context.round_type,
            stage_format: context.stage_format,
            event_id: context.competition_id,
            event_title: context.competition_title,
            category_id: context.category_id,
            category_name: context.category_name,
            criteria,
        }
    }
}

/// Heat status after a status change
#[derive(Debug, Serialize)]
pub struct HeatStatusResponse {
    pub id: i64,
    pub status: HeatStatus,
    pub previous_status: HeatStatus,
    pub changed: bool,
}

/// Ranked heat result row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatResultRow {
    pub participant_id: i64,
    pub participant_name: String,
    pub total_score: f64,
    pub judge_count: i64,
    pub placement: u32,
}

/// Ranked results of a heat
#[derive(Debug, Serialize)]
pub struct HeatResultsResponse {
    pub heat_id: i64,
    pub status: HeatStatus,
    pub results: Vec<HeatResultRow>,
}
