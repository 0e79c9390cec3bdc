//! Round service

use sqlx::PgPool;

use crate::{
    constants::messages,
    db::repositories::{CompetitionRepository, RoundRepository},
    error::{AppError, AppResult},
    handlers::rounds::{request::CreateRoundRequest, response::RoundResponse},
    utils::sanitize_optional,
};

/// Round service for business logic
pub struct RoundService;

impl RoundService {
    /// Rounds of a competition
    pub async fn list_rounds(pool: &PgPool, competition_id: i64) -> AppResult<Vec<RoundResponse>> {
        CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::COMPETITION_NOT_FOUND.to_string()))?;

        let rounds = RoundRepository::list_by_competition(pool, competition_id).await?;
        Ok(rounds.into_iter().map(RoundResponse::from).collect())
    }

    /// Return the round for `(category, round_type, stage_format)`, creating it if absent.
    ///
    /// The flag is `true` when this call created the round.
    pub async fn find_or_create_round(
        pool: &PgPool,
        payload: CreateRoundRequest,
    ) -> AppResult<(RoundResponse, bool)> {
        let category = CompetitionRepository::find_category(pool, payload.category_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::CATEGORY_NOT_FOUND.to_string()))?;

        if category.competition_id != payload.event_id {
            return Err(AppError::Validation(
                "Category does not belong to this competition".to_string(),
            ));
        }

        let stage_format = sanitize_optional(payload.stage_format.as_deref());

        let mut tx = pool.begin().await?;
        let (round, created) = RoundRepository::find_or_create(
            &mut tx,
            payload.event_id,
            payload.category_id,
            payload.round_type,
            stage_format.as_deref(),
        )
        .await?;
        tx.commit().await?;

        if created {
            tracing::info!(
                round_id = round.id,
                category_id = round.category_id,
                label = %round.label(),
                "Round created"
            );
        }

        Ok((round.into(), created))
    }

    /// Get a round
    pub async fn get_round(pool: &PgPool, id: i64) -> AppResult<RoundResponse> {
        let round = RoundRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::ROUND_NOT_FOUND.to_string()))?;

        Ok(round.into())
    }
}
