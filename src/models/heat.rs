//! Heat model and lifecycle

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::RoundType;

/// Heat progress
///
/// Transitions only move forward: `waiting -> in_progress -> finished`,
/// and `waiting -> finished` directly. `finished` is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "heat_status", rename_all = "snake_case")]
pub enum HeatStatus {
    Waiting,
    InProgress,
    Finished,
}

impl HeatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
        }
    }

    /// Whether `target` is reachable from this status.
    ///
    /// Staying in the same status is allowed (no-op).
    pub fn can_transition_to(&self, target: HeatStatus) -> bool {
        target >= *self
    }

    /// Finished heats reject membership edits and deletion
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl Default for HeatStatus {
    fn default() -> Self {
        Self::Waiting
    }
}

impl std::fmt::Display for HeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Heat database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Heat {
    pub id: i64,
    pub round_id: i64,
    pub heat_number: i32,
    pub status: HeatStatus,
}

/// Heat membership joined with the participant's display name
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct HeatParticipant {
    pub heat_id: i64,
    pub participant_id: i64,
    pub participant_name: String,
}

/// Heat joined with the labels of its round, category and competition
#[derive(Debug, Clone, FromRow)]
pub struct HeatContextRow {
    pub id: i64,
    pub heat_number: i32,
    pub status: HeatStatus,
    pub round_id: i64,
    pub round_type: RoundType,
    pub stage_format: Option<String>,
    pub competition_id: i64,
    pub competition_title: String,
    pub category_id: i64,
    pub category_name: String,
}

/// A heat the participant is a member of
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ParticipantHeatRow {
    pub id: i64,
    pub heat_number: i32,
    pub status: HeatStatus,
    pub round_id: i64,
    pub round_type: RoundType,
    pub stage_format: Option<String>,
    pub category_name: String,
    pub event_title: String,
}
