//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Default maximum request body size (1MB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// ALLOCATION DEFAULTS
// =============================================================================

/// Heat size that triggers male/female couple pairing
pub const COUPLE_HEAT_SIZE: usize = 2;

// =============================================================================
// SCORING DEFAULTS
// =============================================================================

/// Scale lower bound for criteria created by name only
pub const DEFAULT_SCALE_MIN: f64 = 0.0;

/// Scale upper bound for criteria created by name only
pub const DEFAULT_SCALE_MAX: f64 = 10.0;

// =============================================================================
// FIELD LIMITS
// =============================================================================

/// Maximum competition title length
pub const MAX_COMPETITION_TITLE_LENGTH: u64 = 255;

/// Maximum competition location length
pub const MAX_LOCATION_LENGTH: u64 = 255;

/// Maximum category name length
pub const MAX_CATEGORY_NAME_LENGTH: u64 = 128;

/// Maximum criterion name length
pub const MAX_CRITERION_NAME_LENGTH: u64 = 64;

/// Maximum first/last name length
pub const MAX_PERSON_NAME_LENGTH: u64 = 64;

/// Maximum full name length (first + last)
pub const MAX_FULL_NAME_LENGTH: u64 = 129;

/// Maximum participant/user role label length
pub const MAX_ROLE_LENGTH: u64 = 32;

/// Maximum round stage format label length
pub const MAX_STAGE_FORMAT_LENGTH: u64 = 32;

/// Maximum email length
pub const MAX_EMAIL_LENGTH: u64 = 128;

/// Maximum number of participants in a single manual heat request
pub const MAX_MANUAL_HEAT_PARTICIPANTS: u64 = 256;

// =============================================================================
// ERROR MESSAGES
// =============================================================================

pub mod messages {
    pub const COMPETITION_NOT_FOUND: &str = "Competition not found";
    pub const CATEGORY_NOT_FOUND: &str = "Category not found";
    pub const ROUND_NOT_FOUND: &str = "Round not found";
    pub const HEAT_NOT_FOUND: &str = "Heat not found";
    pub const PARTICIPANT_NOT_FOUND: &str = "Participant not found";
    pub const CRITERION_NOT_FOUND: &str = "Criterion not found";
    pub const JUDGE_NOT_FOUND: &str = "Judge not found";
    pub const EMPTY_HEAT_SELECTION: &str = "Select at least one participant";
    pub const NOTHING_TO_UPDATE: &str = "No fields to update";
}
