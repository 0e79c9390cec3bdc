//! Input validation utilities

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SCALE_MAX, DEFAULT_SCALE_MIN, MAX_CRITERION_NAME_LENGTH, MAX_PERSON_NAME_LENGTH,
};

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitize an optional label, mapping blank input to `None`
pub fn sanitize_optional(input: Option<&str>) -> Option<String> {
    input.map(sanitize_string).filter(|s| !s.is_empty())
}

/// Split "First [Middle] Last" into `(first_name, last_name)`.
///
/// The last whitespace-separated token is the last name; everything before
/// it is the first name.
pub fn split_full_name(full_name: &str) -> Result<(String, String), &'static str> {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    if parts.len() < 2 {
        return Err("Full name must contain a first and a last name separated by a space");
    }

    let (last, first) = parts.split_last().ok_or("Full name cannot be empty")?;
    let first_name = first.join(" ");
    let last_name = last.to_string();

    validate_person_name(&first_name)?;
    validate_person_name(&last_name)?;

    Ok((first_name, last_name))
}

/// Validate a single first or last name
pub fn validate_person_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty");
    }
    if name.chars().count() as u64 > MAX_PERSON_NAME_LENGTH {
        return Err("Name must be at most 64 characters");
    }
    Ok(())
}

/// Parse an ISO `YYYY-MM-DD` competition date; blank input means no date
pub fn parse_competition_date(date: Option<&str>) -> Result<Option<NaiveDate>, &'static str> {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| "Invalid date format, expected YYYY-MM-DD"),
    }
}

/// Criterion definition as accepted on category creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CriterionInput {
    /// Bare name, scored on the default scale
    Name(String),
    /// Name with an explicit scale
    Scaled {
        name: String,
        scale_min: Option<f64>,
        scale_max: Option<f64>,
    },
}

/// Criterion ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewCriterion {
    pub name: String,
    pub scale_min: f64,
    pub scale_max: f64,
}

/// Normalize criteria input: trim names, drop blank entries, apply default scale.
///
/// Fails when nothing remains or a scale is empty or inverted.
pub fn normalize_criteria(input: &[CriterionInput]) -> Result<Vec<NewCriterion>, &'static str> {
    let mut criteria = Vec::with_capacity(input.len());

    for item in input {
        let (name, scale_min, scale_max) = match item {
            CriterionInput::Name(name) => (name, None, None),
            CriterionInput::Scaled {
                name,
                scale_min,
                scale_max,
            } => (name, *scale_min, *scale_max),
        };

        let name = sanitize_string(name);
        if name.is_empty() {
            continue;
        }
        if name.chars().count() as u64 > MAX_CRITERION_NAME_LENGTH {
            return Err("Criterion name must be at most 64 characters");
        }

        let scale_min = scale_min.unwrap_or(DEFAULT_SCALE_MIN);
        let scale_max = scale_max.unwrap_or(DEFAULT_SCALE_MAX);
        if !scale_min.is_finite() || !scale_max.is_finite() {
            return Err("Criterion scale bounds must be finite numbers");
        }
        if scale_min < 0.0 {
            return Err("Criterion scale_min must not be negative");
        }
        if scale_min >= scale_max {
            return Err("Criterion scale_min must be lower than scale_max");
        }

        criteria.push(NewCriterion {
            name,
            scale_min,
            scale_max,
        });
    }

    if criteria.is_empty() {
        return Err("At least one criterion is required");
    }

    Ok(criteria)
}

/// Collapse a participant selection to sorted unique ids
pub fn normalize_participant_ids(ids: &[i64]) -> Result<Vec<i64>, &'static str> {
    let mut unique = ids.to_vec();
    unique.sort_unstable();
    unique.dedup();

    if unique.is_empty() {
        return Err(crate::constants::messages::EMPTY_HEAT_SELECTION);
    }
    if unique.iter().any(|id| *id <= 0) {
        return Err("Participant ids must be positive");
    }

    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_name() {
        assert_eq!(
            split_full_name("Anna Petrova").unwrap(),
            ("Anna".to_string(), "Petrova".to_string())
        );
        assert_eq!(
            split_full_name("  Mary  Jane   Watson ").unwrap(),
            ("Mary Jane".to_string(), "Watson".to_string())
        );
        assert!(split_full_name("Madonna").is_err());
        assert!(split_full_name("   ").is_err());
    }

    #[test]
    fn test_parse_competition_date() {
        assert_eq!(
            parse_competition_date(Some("2026-05-17")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 5, 17)
        );
        assert_eq!(parse_competition_date(None).unwrap(), None);
        assert_eq!(parse_competition_date(Some("  ")).unwrap(), None);
        assert!(parse_competition_date(Some("17.05.2026")).is_err());
    }

    #[test]
    fn test_normalize_criteria_defaults_and_blanks() {
        let input = vec![
            CriterionInput::Name(" Technique ".to_string()),
            CriterionInput::Name("   ".to_string()),
            CriterionInput::Scaled {
                name: "Musicality".to_string(),
                scale_min: Some(1.0),
                scale_max: Some(5.0),
            },
        ];

        let criteria = normalize_criteria(&input).unwrap();
        assert_eq!(
            criteria,
            vec![
                NewCriterion {
                    name: "Technique".to_string(),
                    scale_min: 0.0,
                    scale_max: 10.0,
                },
                NewCriterion {
                    name: "Musicality".to_string(),
                    scale_min: 1.0,
                    scale_max: 5.0,
                },
            ]
        );
    }

    #[test]
    fn test_normalize_criteria_rejects_bad_input() {
        assert!(normalize_criteria(&[]).is_err());
        assert!(normalize_criteria(&[CriterionInput::Name(" ".to_string())]).is_err());
        assert!(
            normalize_criteria(&[CriterionInput::Scaled {
                name: "Show".to_string(),
                scale_min: Some(10.0),
                scale_max: Some(10.0),
            }])
            .is_err()
        );
        assert!(
            normalize_criteria(&[CriterionInput::Scaled {
                name: "Show".to_string(),
                scale_min: Some(-5.0),
                scale_max: Some(5.0),
            }])
            .is_err()
        );
    }

    #[test]
    fn test_criterion_input_accepts_both_shapes() {
        let parsed: Vec<CriterionInput> =
            serde_json::from_str(r#"["Technique", {"name": "Show", "scale_max": 5}]"#).unwrap();
        let criteria = normalize_criteria(&parsed).unwrap();
        assert_eq!(criteria[0].scale_max, 10.0);
        assert_eq!(criteria[1].scale_max, 5.0);
    }

    #[test]
    fn test_normalize_participant_ids() {
        assert_eq!(normalize_participant_ids(&[5, 3, 5, 1]).unwrap(), vec![1, 3, 5]);
        assert!(normalize_participant_ids(&[]).is_err());
        assert!(normalize_participant_ids(&[2, 0]).is_err());
    }
}
