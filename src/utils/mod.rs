//! Utility functions

pub mod validation;

pub use validation::{
    normalize_criteria, normalize_participant_ids, parse_competition_date, sanitize_optional,
    sanitize_string, split_full_name, validate_person_name,
};
