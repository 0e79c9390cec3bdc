//! Competition, category and criterion models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Competition (event) database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Competition {
    pub id: i64,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Category level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "category_type", rename_all = "lowercase")]
pub enum CategoryType {
    Amateur,
    Pro,
    Master,
    Debut,
}

impl CategoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amateur => "amateur",
            Self::Pro => "pro",
            Self::Master => "master",
            Self::Debut => "debut",
        }
    }
}

impl std::fmt::Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub competition_id: i64,
    pub name: String,
    pub category_type: CategoryType,
}

/// Scoring criterion with its numeric scale
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Criterion {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub scale_min: f64,
    pub scale_max: f64,
}

impl Criterion {
    /// Check whether a score value lies on this criterion's scale (bounds inclusive)
    pub fn accepts(&self, value: f64) -> bool {
        value.is_finite() && value >= self.scale_min && value <= self.scale_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(scale_min: f64, scale_max: f64) -> Criterion {
        Criterion {
            id: 3,
            category_id: 1,
            name: "Technique".to_string(),
            scale_min,
            scale_max,
        }
    }

    #[test]
    fn test_scale_bounds_are_inclusive() {
        let c = criterion(0.0, 10.0);
        assert!(c.accepts(0.0));
        assert!(c.accepts(10.0));
        assert!(c.accepts(8.5));
        assert!(!c.accepts(-0.1));
        assert!(!c.accepts(10.01));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let c = criterion(1.0, 5.0);
        assert!(!c.accepts(f64::NAN));
        assert!(!c.accepts(f64::INFINITY));
    }
}
