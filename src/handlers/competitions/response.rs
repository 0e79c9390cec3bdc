//! Competition response DTOs

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Category, CategoryType, Competition, Criterion};

/// Competition with its categories
#[derive(Debug, Serialize)]
pub struct CompetitionResponse {
    pub id: i64,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub categories: Vec<CategoryResponse>,
}

impl CompetitionResponse {
    pub fn new(competition: Competition, categories: Vec<CategoryResponse>) -> Self {
        Self {
            id: competition.id,
            title: competition.title,
            date: competition.date,
            location: competition.location,
            categories,
        }
    }
}

/// Category with its criteria
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub criteria: Vec<CriterionResponse>,
}

impl CategoryResponse {
    pub fn new(category: Category, criteria: Vec<CriterionResponse>) -> Self {
        Self {
            id: category.id,
            name: category.name,
            category_type: category.category_type,
            criteria,
        }
    }
}

/// Criterion with its scale
#[derive(Debug, Clone, Serialize)]
pub struct CriterionResponse {
    pub id: i64,
    pub name: String,
    pub scale_min: f64,
    pub scale_max: f64,
}

impl From<Criterion> for CriterionResponse {
    fn from(criterion: Criterion) -> Self {
        Self {
            id: criterion.id,
            name: criterion.name,
            scale_min: criterion.scale_min,
            scale_max: criterion.scale_max,
        }
    }
}
