//! Heat request DTOs

use serde::Deserialize;

use crate::models::HeatStatus;

/// Heat status change request
#[derive(Debug, Deserialize)]
pub struct UpdateHeatStatusRequest {
    pub status: HeatStatus,
}
