//! Scoring ledger service

use sqlx::PgPool;

use crate::{
    constants::messages,
    db::repositories::{
        CompetitionRepository, HeatRepository, ParticipantRepository, RoundRepository,
        ScoreRepository, UserRepository,
    },
    error::{AppError, AppResult},
    handlers::{
        heats::response::{HeatResultRow, HeatResultsResponse},
        scores::{request::SubmitScoreRequest, response::ScoreResponse},
    },
    models::{Criterion, ResultTotalRow},
};

/// Score service for business logic
pub struct ScoreService;

impl ScoreService {
    /// Record a score, overwriting any earlier value for the same key.
    ///
    /// Writes against finished heats are accepted as corrections. The round
    /// is share-locked first, so the heat checks and the write see the same
    /// heats even while a redistribution is pending.
    pub async fn submit_score(
        pool: &PgPool,
        payload: SubmitScoreRequest,
    ) -> AppResult<ScoreResponse> {
        if !payload.score.is_finite() {
            return Err(AppError::Validation(
                "Score must be a finite number".to_string(),
            ));
        }

        let mut tx = pool.begin().await?;

        let round = RoundRepository::lock_shared(&mut tx, payload.round_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::ROUND_NOT_FOUND.to_string()))?;

        let participant = ParticipantRepository::find_by_id(&mut *tx, payload.participant_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::PARTICIPANT_NOT_FOUND.to_string()))?;
        if participant.category_id != round.category_id {
            return Err(AppError::Validation(
                "Participant is not registered in this round's category".to_string(),
            ));
        }

        if !UserRepository::exists(&mut *tx, payload.judge_id).await? {
            return Err(AppError::NotFound(messages::JUDGE_NOT_FOUND.to_string()));
        }

        if let Some(heat_id) = payload.heat_id {
            let heat = HeatRepository::find_by_id(&mut *tx, heat_id)
                .await?
                .ok_or_else(|| AppError::NotFound(messages::HEAT_NOT_FOUND.to_string()))?;
            if heat.round_id != round.id {
                return Err(AppError::Validation(
                    "Heat does not belong to this round".to_string(),
                ));
            }
            if !HeatRepository::is_member(&mut tx, heat.id, participant.id).await? {
                return Err(AppError::Validation(
                    "Participant is not a member of this heat".to_string(),
                ));
            }
            if heat.status.is_locked() {
                tracing::info!(
                    heat_id = heat.id,
                    participant_id = participant.id,
                    judge_id = payload.judge_id,
                    "Score correction on finished heat"
                );
            }
        }

        let criterion = match payload.criterion_id {
            Some(criterion_id) => {
                let criterion = CompetitionRepository::find_criterion(&mut *tx, criterion_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(messages::CRITERION_NOT_FOUND.to_string()))?;
                if criterion.category_id != round.category_id {
                    return Err(AppError::Validation(
                        "Criterion does not belong to this round's category".to_string(),
                    ));
                }
                Some(criterion)
            }
            None => None,
        };

        check_score_value(payload.score, criterion.as_ref())?;

        let score = ScoreRepository::upsert(
            &mut tx,
            participant.id,
            payload.judge_id,
            round.id,
            payload.heat_id,
            payload.criterion_id,
            payload.score,
        )
        .await?;

        tx.commit().await?;

        tracing::debug!(
            score_id = score.id,
            participant_id = score.participant_id,
            judge_id = score.judge_id,
            heat_id = ?score.heat_id,
            criterion_id = ?score.criterion_id,
            "Score recorded"
        );

        Ok(score.into())
    }

    /// Every score recorded against a heat
    pub async fn list_scores(pool: &PgPool, heat_id: i64) -> AppResult<Vec<ScoreResponse>> {
        HeatRepository::find_by_id(pool, heat_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::HEAT_NOT_FOUND.to_string()))?;

        let scores = ScoreRepository::list_by_heat(pool, heat_id).await?;
        Ok(scores.into_iter().map(ScoreResponse::from).collect())
    }

    /// Ranked score totals of a heat
    pub async fn heat_results(pool: &PgPool, heat_id: i64) -> AppResult<HeatResultsResponse> {
        let heat = HeatRepository::find_by_id(pool, heat_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::HEAT_NOT_FOUND.to_string()))?;

        let totals = ScoreRepository::totals_for_heat(pool, heat.id).await?;

        Ok(HeatResultsResponse {
            heat_id: heat.id,
            status: heat.status,
            results: rank_results(totals),
        })
    }
}

/// Range check: within the criterion's scale, or non-negative without one
fn check_score_value(value: f64, criterion: Option<&Criterion>) -> AppResult<()> {
    match criterion {
        Some(criterion) if !criterion.accepts(value) => Err(AppError::Validation(format!(
            "Score for {} must be between {} and {}",
            criterion.name, criterion.scale_min, criterion.scale_max
        ))),
        None if !(value.is_finite() && value >= 0.0) => Err(AppError::Validation(
            "Score must not be negative".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Order by total descending and assign competition placements (1, 2, 2, 4)
fn rank_results(mut totals: Vec<ResultTotalRow>) -> Vec<HeatResultRow> {
    totals.sort_by(|a, b| {
        b.total_score
            .total_cmp(&a.total_score)
            .then(a.participant_id.cmp(&b.participant_id))
    });

    let mut results: Vec<HeatResultRow> = Vec::with_capacity(totals.len());
    for (index, row) in totals.into_iter().enumerate() {
        let placement = match results.last() {
            Some(prev) if prev.total_score == row.total_score => prev.placement,
            _ => index as u32 + 1,
        };
        results.push(HeatResultRow {
            participant_id: row.participant_id,
            participant_name: row.participant_name,
            total_score: row.total_score,
            judge_count: row.judge_count,
            placement,
        });
    }

    results
}
