//! Participant model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::CategoryType;

/// Participant gender, used for couple pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "gender", rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Participant database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub competition_id: i64,
    pub category_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Bib number
    pub number: Option<i32>,
    pub role: Option<String>,
    pub gender: Option<Gender>,
}

impl Participant {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Participant joined with category and competition
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantProfileRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub number: Option<i32>,
    pub role: Option<String>,
    pub gender: Option<Gender>,
    pub category_id: i64,
    pub category_name: String,
    pub category_type: CategoryType,
    pub competition_id: i64,
    pub competition_title: String,
    pub competition_date: Option<NaiveDate>,
    pub competition_location: Option<String>,
}
