//! Round model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Phase of a category within a competition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "round_type", rename_all = "lowercase")]
pub enum RoundType {
    Preliminary,
    Semifinal,
    Final,
}

impl RoundType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preliminary => "preliminary",
            Self::Semifinal => "semifinal",
            Self::Final => "final",
        }
    }
}

impl std::fmt::Display for RoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Round database model
///
/// `(category_id, round_type, stage_format)` is unique and serves as the
/// natural key for find-or-create.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Round {
    pub id: i64,
    pub competition_id: i64,
    pub category_id: i64,
    pub round_type: RoundType,
    pub stage_format: Option<String>,
}

impl Round {
    /// Human-readable label, e.g. `final · 1/8`
    pub fn label(&self) -> String {
        match self.stage_format.as_deref() {
            Some(stage) if !stage.is_empty() => format!("{} · {}", self.round_type, stage),
            _ => self.round_type.to_string(),
        }
    }
}
