//! Participant statistics service

use sqlx::PgPool;

use crate::{
    constants::messages,
    db::repositories::{HeatRepository, ParticipantRepository, ScoreRepository},
    error::{AppError, AppResult},
    handlers::stats::response::ParticipantStatsResponse,
};

/// Statistics service for business logic
pub struct StatsService;

impl StatsService {
    /// Profile, heats and scores of a participant.
    ///
    /// Scores whose heat was replaced by a redistribution are kept and
    /// flagged as orphaned.
    pub async fn participant_stats(
        pool: &PgPool,
        participant_id: i64,
    ) -> AppResult<ParticipantStatsResponse> {
        let profile = ParticipantRepository::find_profile(pool, participant_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::PARTICIPANT_NOT_FOUND.to_string()))?;

        let (heats, scores) = futures::try_join!(
            HeatRepository::list_for_participant(pool, profile.id),
            ScoreRepository::list_by_participant(pool, profile.id),
        )?;

        Ok(ParticipantStatsResponse::new(profile, heats, scores))
    }
}
