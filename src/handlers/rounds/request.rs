//! Round and heat-composition request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_MANUAL_HEAT_PARTICIPANTS, MAX_STAGE_FORMAT_LENGTH},
    models::RoundType,
};

/// Find-or-create round request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoundRequest {
    /// Owning competition
    #[serde(alias = "competition_id")]
    pub event_id: i64,

    pub category_id: i64,

    pub round_type: RoundType,

    /// Free-text stage label, e.g. `1/8`
    #[validate(length(max = MAX_STAGE_FORMAT_LENGTH))]
    pub stage_format: Option<String>,
}

/// List rounds query parameters
#[derive(Debug, Deserialize)]
pub struct ListRoundsQuery {
    #[serde(alias = "competition_id")]
    pub event_id: i64,
}

/// Automatic distribution request
#[derive(Debug, Deserialize, Validate)]
pub struct DistributeRequest {
    #[validate(range(min = 1))]
    pub max_in_heat: i64,
}

/// Manual heat composition request
#[derive(Debug, Deserialize, Validate)]
pub struct ManualHeatRequest {
    #[validate(length(min = 1, max = MAX_MANUAL_HEAT_PARTICIPANTS))]
    pub participant_ids: Vec<i64>,
}
