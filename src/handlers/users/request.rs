//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_EMAIL_LENGTH, MAX_PERSON_NAME_LENGTH, MAX_ROLE_LENGTH};

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = MAX_PERSON_NAME_LENGTH))]
    pub first_name: String,

    #[validate(length(min = 1, max = MAX_PERSON_NAME_LENGTH))]
    pub last_name: String,

    /// e.g. `judge`, `organizer`
    #[validate(length(min = 1, max = MAX_ROLE_LENGTH))]
    pub role: String,

    #[validate(email, length(max = MAX_EMAIL_LENGTH))]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_validated_when_present() {
        let mut request = CreateUserRequest {
            first_name: "Ivan".to_string(),
            last_name: "Sidorov".to_string(),
            role: "judge".to_string(),
            email: None,
        };
        assert!(request.validate().is_ok());

        request.email = Some("not-an-email".to_string());
        assert!(request.validate().is_err());

        request.email = Some("judge@example.com".to_string());
        assert!(request.validate().is_ok());
    }
}
