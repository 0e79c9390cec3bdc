//! Competition request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_CATEGORY_NAME_LENGTH, MAX_COMPETITION_TITLE_LENGTH, MAX_LOCATION_LENGTH},
    models::CategoryType,
    utils::validation::CriterionInput,
};

/// Create competition request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompetitionRequest {
    #[validate(length(min = 1, max = MAX_COMPETITION_TITLE_LENGTH))]
    pub title: String,

    /// ISO date, `YYYY-MM-DD`
    pub date: Option<String>,

    #[validate(length(max = MAX_LOCATION_LENGTH))]
    pub location: Option<String>,
}

/// Create category request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = MAX_CATEGORY_NAME_LENGTH))]
    pub name: String,

    /// amateur | pro | master | debut
    #[serde(rename = "type", alias = "category_type")]
    pub category_type: CategoryType,

    /// Criterion names or `{name, scale_min, scale_max}` objects
    #[validate(length(min = 1))]
    pub criteria: Vec<CriterionInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_request_requires_criteria() {
        let request: CreateCategoryRequest =
            serde_json::from_str(r#"{"name": "Solo", "type": "pro", "criteria": []}"#).unwrap();
        assert!(request.validate().is_err());

        let request: CreateCategoryRequest = serde_json::from_str(
            r#"{"name": "Solo", "type": "debut", "criteria": ["Technique"]}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.category_type, CategoryType::Debut);
    }

    #[test]
    fn test_criteria_length_error_names_field() {
        let request: CreateCategoryRequest =
            serde_json::from_str(r#"{"name": "Solo", "type": "pro", "criteria": []}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("criteria"));

        let request: CreateCategoryRequest = serde_json::from_str(
            r#"{"name": "Solo", "type": "amateur",
                "criteria": ["Technique", {"name": "Musicality", "scale_min": 1, "scale_max": 6}]}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.criteria.len(), 2);
    }

    #[test]
    fn test_unknown_category_type_rejected() {
        let parsed = serde_json::from_str::<CreateCategoryRequest>(
            r#"{"name": "Solo", "type": "legend", "criteria": ["Technique"]}"#,
        );
        assert!(parsed.is_err());
    }
}
