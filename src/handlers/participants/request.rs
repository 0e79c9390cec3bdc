//! Participant request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_FULL_NAME_LENGTH, MAX_PERSON_NAME_LENGTH, MAX_ROLE_LENGTH},
    models::Gender,
};

/// Create participant request.
///
/// Either `full_name` ("First Last") or both `first_name` and `last_name`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateParticipantRequest {
    #[validate(length(min = 1, max = MAX_FULL_NAME_LENGTH))]
    pub full_name: Option<String>,

    #[validate(length(min = 1, max = MAX_PERSON_NAME_LENGTH))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = MAX_PERSON_NAME_LENGTH))]
    pub last_name: Option<String>,

    /// Bib number
    #[validate(range(min = 0))]
    pub number: Option<i32>,

    #[validate(length(max = MAX_ROLE_LENGTH))]
    pub role: Option<String>,

    pub gender: Option<Gender>,

    pub category_id: i64,
}

/// Update participant request; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateParticipantRequest {
    #[validate(length(min = 1, max = MAX_FULL_NAME_LENGTH))]
    pub full_name: Option<String>,

    #[validate(range(min = 0))]
    pub number: Option<i32>,

    #[validate(length(max = MAX_ROLE_LENGTH))]
    pub role: Option<String>,

    pub gender: Option<Gender>,

    pub category_id: Option<i64>,
}

impl UpdateParticipantRequest {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.number.is_none()
            && self.role.is_none()
            && self.gender.is_none()
            && self.category_id.is_none()
    }
}

/// List participants query parameters
#[derive(Debug, Deserialize)]
pub struct ListParticipantsQuery {
    pub category_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_detected() {
        let update: UpdateParticipantRequest = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());

        let update: UpdateParticipantRequest =
            serde_json::from_str(r#"{"gender": "female"}"#).unwrap();
        assert!(!update.is_empty());
        assert_eq!(update.gender, Some(Gender::Female));
    }
}
