//! Participant response DTOs

use serde::Serialize;

use crate::models::{Gender, Participant};

/// Participant response
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub number: Option<i32>,
    pub role: Option<String>,
    pub gender: Option<Gender>,
    pub category_id: i64,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant.id,
            first_name: participant.first_name,
            last_name: participant.last_name,
            number: participant.number,
            role: participant.role,
            gender: participant.gender,
            category_id: participant.category_id,
        }
    }
}
