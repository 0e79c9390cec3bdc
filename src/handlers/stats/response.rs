//! Participant statistics DTOs

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{
    CategoryType, Gender, ParticipantHeatRow, ParticipantProfileRow, ParticipantScoreRow,
};

/// Participant statistics
#[derive(Debug, Serialize)]
pub struct ParticipantStatsResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub number: Option<i32>,
    pub role: Option<String>,
    pub gender: Option<Gender>,
    pub category_id: i64,
    pub category_name: String,
    pub category_type: CategoryType,
    pub event_id: i64,
    pub event_title: String,
    pub event_date: Option<NaiveDate>,
    pub event_location: Option<String>,
    pub heats: Vec<ParticipantHeatRow>,
    pub scores: Vec<ParticipantScoreRow>,
}

impl ParticipantStatsResponse {
    pub fn new(
        profile: ParticipantProfileRow,
        heats: Vec<ParticipantHeatRow>,
        scores: Vec<ParticipantScoreRow>,
    ) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            number: profile.number,
            role: profile.role,
            gender: profile.gender,
            category_id: profile.category_id,
            category_name: profile.category_name,
            category_type: profile.category_type,
            event_id: profile.competition_id,
            event_title: profile.competition_title,
            event_date: profile.competition_date,
            event_location: profile.competition_location,
            heats,
            scores,
        }
    }
}
