//! Heat lifecycle service

use sqlx::PgPool;

use crate::{
    constants::messages,
    db::repositories::HeatRepository,
    error::{AppError, AppResult},
    handlers::heats::response::HeatStatusResponse,
    models::HeatStatus,
};

/// Heat lifecycle service for business logic
pub struct LifecycleService;

impl LifecycleService {
    /// Move a heat to `target`.
    ///
    /// Re-applying the current status succeeds without a write. Any move
    /// backwards fails with an invalid transition error.
    pub async fn set_status(
        pool: &PgPool,
        heat_id: i64,
        target: HeatStatus,
    ) -> AppResult<HeatStatusResponse> {
        let mut tx = pool.begin().await?;
        let heat = HeatRepository::lock(&mut tx, heat_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::HEAT_NOT_FOUND.to_string()))?;

        let previous = heat.status;
        if !check_transition(previous, target)? {
            tx.commit().await?;
            return Ok(HeatStatusResponse {
                id: heat.id,
                status: previous,
                previous_status: previous,
                changed: false,
            });
        }

        let updated = HeatRepository::update_status(&mut tx, heat.id, target).await?;
        tx.commit().await?;

        if updated.status == HeatStatus::Finished {
            tracing::info!(
                heat_id = updated.id,
                round_id = updated.round_id,
                heat_number = updated.heat_number,
                "Heat finished"
            );
        } else {
            tracing::debug!(heat_id = updated.id, from = %previous, to = %target, "Heat status changed");
        }

        Ok(HeatStatusResponse {
            id: updated.id,
            status: updated.status,
            previous_status: previous,
            changed: true,
        })
    }
}

/// Returns whether moving `current -> target` needs a write
fn check_transition(current: HeatStatus, target: HeatStatus) -> AppResult<bool> {
    if current == target {
        return Ok(false);
    }
    if !current.can_transition_to(target) {
        return Err(AppError::InvalidTransition {
            from: current,
            to: target,
        });
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_status_is_noop() {
        for status in [
            HeatStatus::Waiting,
            HeatStatus::InProgress,
            HeatStatus::Finished,
        ] {
            assert!(!check_transition(status, status).unwrap());
        }
    }

    #[test]
    fn test_forward_moves_need_write() {
        assert!(check_transition(HeatStatus::Waiting, HeatStatus::InProgress).unwrap());
        assert!(check_transition(HeatStatus::InProgress, HeatStatus::Finished).unwrap());
        assert!(check_transition(HeatStatus::Waiting, HeatStatus::Finished).unwrap());
    }

    #[test]
    fn test_regression_is_rejected_as_conflict() {
        let err = check_transition(HeatStatus::Finished, HeatStatus::Waiting).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidTransition {
                from: HeatStatus::Finished,
                to: HeatStatus::Waiting
            }
        ));
        assert!(err.is_conflict());

        assert!(check_transition(HeatStatus::InProgress, HeatStatus::Waiting).is_err());
        assert!(check_transition(HeatStatus::Finished, HeatStatus::InProgress).is_err());
    }
}
