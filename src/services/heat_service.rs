//! Heat allocation and composition service
//!
//! Every mutation of a round's heats runs in one transaction that first
//! locks the round row, so distribution and manual edits of the same round
//! are serialized and a failed step leaves the previous heats in place.

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};

use crate::{
    allocation::{AllocationOptions, plan_heats, validate_max_in_heat},
    constants::messages,
    db::repositories::{
        CompetitionRepository, HeatRepository, ParticipantRepository, RoundRepository,
        ScoreRepository,
    },
    error::{AppError, AppResult},
    handlers::{
        heats::response::{HeatDetailResponse, HeatParticipantResponse, HeatResponse},
        rounds::response::DistributionResponse,
    },
    models::{Heat, HeatParticipant, HeatStatus, Participant, Round},
    utils::normalize_participant_ids,
};

/// Heat service for business logic
pub struct HeatService;

impl HeatService {
    /// Replace every heat of a round with a fresh partition of its category roster.
    ///
    /// Destructive: previous heats and memberships are deleted, and scores
    /// that pointed at them stay behind as orphans. Both counts are reported.
    pub async fn distribute(
        pool: &PgPool,
        options: &AllocationOptions,
        round_id: i64,
        max_in_heat: i64,
    ) -> AppResult<DistributionResponse> {
        validate_max_in_heat(max_in_heat)?;

        let mut tx = pool.begin().await?;
        let round = Self::lock_round(&mut tx, round_id).await?;

        let roster = ParticipantRepository::roster(&mut *tx, round.category_id).await?;
        let plan = plan_heats(&roster, max_in_heat, options)?;

        let scores_orphaned = ScoreRepository::count_for_round_heats(&mut tx, round.id).await?;
        let heats_replaced = HeatRepository::delete_by_round(&mut tx, round.id).await?;

        let mut heats = Vec::with_capacity(plan.len());
        for (index, participant_ids) in plan.iter().enumerate() {
            let heat_number = i32::try_from(index + 1)
                .map_err(|_| AppError::Validation("Too many heats".to_string()))?;
            let heat =
                HeatRepository::create(&mut tx, round.id, heat_number, HeatStatus::Waiting).await?;
            HeatRepository::add_members(&mut tx, heat.id, round.id, participant_ids).await?;
            heats.push(heat);
        }

        let heat_ids: Vec<i64> = heats.iter().map(|h| h.id).collect();
        let members = HeatRepository::list_members(&mut *tx, &heat_ids).await?;
        tx.commit().await?;

        if heats_replaced > 0 {
            tracing::warn!(
                round_id = round.id,
                heats_replaced,
                scores_orphaned,
                "Redistribution replaced existing heats"
            );
        }
        tracing::info!(
            round_id = round.id,
            participants = roster.len(),
            max_in_heat,
            heats_created = heats.len(),
            "Heats distributed"
        );

        Ok(DistributionResponse {
            status: "ok",
            round_id: round.id,
            heats_created: heats.len(),
            heats_replaced,
            scores_orphaned,
            heats: assemble(heats, members),
        })
    }

    /// Heats of a round with their members
    pub async fn list_heats(pool: &PgPool, round_id: i64) -> AppResult<Vec<HeatResponse>> {
        RoundRepository::find_by_id(pool, round_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::ROUND_NOT_FOUND.to_string()))?;

        let heats = HeatRepository::list_by_round(pool, round_id).await?;
        let heat_ids: Vec<i64> = heats.iter().map(|h| h.id).collect();
        let members = HeatRepository::list_members(pool, &heat_ids).await?;

        Ok(assemble(heats, members))
    }

    /// Append a heat composed by hand; it takes the next free heat number
    pub async fn create_manual_heat(
        pool: &PgPool,
        round_id: i64,
        participant_ids: &[i64],
    ) -> AppResult<HeatResponse> {
        let ids = normalize_participant_ids(participant_ids)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let mut tx = pool.begin().await?;
        let round = Self::lock_round(&mut tx, round_id).await?;
        Self::check_selection(&mut tx, &round, None, &ids).await?;

        let heat_number = HeatRepository::next_heat_number(&mut tx, round.id).await?;
        let heat =
            HeatRepository::create(&mut tx, round.id, heat_number, HeatStatus::Waiting).await?;
        HeatRepository::add_members(&mut tx, heat.id, round.id, &ids).await?;
        let members = HeatRepository::list_members(&mut *tx, &[heat.id]).await?;
        tx.commit().await?;

        tracing::info!(
            round_id = round.id,
            heat_id = heat.id,
            heat_number,
            participants = ids.len(),
            "Manual heat created"
        );

        Ok(into_response(heat, members))
    }

    /// Replace the full membership of a heat that has not finished
    pub async fn update_manual_heat(
        pool: &PgPool,
        round_id: i64,
        heat_id: i64,
        participant_ids: &[i64],
    ) -> AppResult<HeatResponse> {
        let ids = normalize_participant_ids(participant_ids)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let mut tx = pool.begin().await?;
        let round = Self::lock_round(&mut tx, round_id).await?;
        let heat = Self::lock_mutable_heat(&mut tx, &round, heat_id).await?;
        Self::check_selection(&mut tx, &round, Some(heat.id), &ids).await?;

        HeatRepository::clear_members(&mut tx, heat.id).await?;
        HeatRepository::add_members(&mut tx, heat.id, round.id, &ids).await?;
        let members = HeatRepository::list_members(&mut *tx, &[heat.id]).await?;
        tx.commit().await?;

        tracing::info!(
            round_id = round.id,
            heat_id = heat.id,
            participants = ids.len(),
            "Heat membership replaced"
        );

        Ok(into_response(heat, members))
    }

    /// Delete a heat that has not finished, with its memberships
    pub async fn delete_heat(pool: &PgPool, round_id: i64, heat_id: i64) -> AppResult<()> {
        let mut tx = pool.begin().await?;
        let round = Self::lock_round(&mut tx, round_id).await?;
        let heat = Self::lock_mutable_heat(&mut tx, &round, heat_id).await?;

        HeatRepository::delete(&mut tx, heat.id).await?;
        tx.commit().await?;

        tracing::info!(
            round_id = round.id,
            heat_id = heat.id,
            heat_number = heat.heat_number,
            "Heat deleted"
        );

        Ok(())
    }

    /// Heat with members, criteria of its category and parent labels
    pub async fn get_heat_detail(pool: &PgPool, heat_id: i64) -> AppResult<HeatDetailResponse> {
        let context = HeatRepository::find_context(pool, heat_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::HEAT_NOT_FOUND.to_string()))?;

        let members = HeatRepository::list_members(pool, &[context.id]).await?;
        let criteria = CompetitionRepository::list_criteria(pool, &[context.category_id]).await?;

        Ok(HeatDetailResponse::new(
            context,
            members.into_iter().map(HeatParticipantResponse::from).collect(),
            criteria.into_iter().map(Into::into).collect(),
        ))
    }

    async fn lock_round(conn: &mut PgConnection, round_id: i64) -> AppResult<Round> {
        RoundRepository::lock(conn, round_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::ROUND_NOT_FOUND.to_string()))
    }

    /// Lock a heat of `round` and refuse it when finished
    async fn lock_mutable_heat(
        conn: &mut PgConnection,
        round: &Round,
        heat_id: i64,
    ) -> AppResult<Heat> {
        let heat = HeatRepository::lock(conn, heat_id)
            .await?
            .filter(|h| h.round_id == round.id)
            .ok_or_else(|| AppError::NotFound(messages::HEAT_NOT_FOUND.to_string()))?;

        if heat.status.is_locked() {
            return Err(AppError::HeatLocked(heat.id));
        }

        Ok(heat)
    }

    /// Participants must exist, belong to the round's category and sit in no other heat
    async fn check_selection(
        conn: &mut PgConnection,
        round: &Round,
        exclude_heat_id: Option<i64>,
        ids: &[i64],
    ) -> AppResult<()> {
        let participants = ParticipantRepository::find_many(&mut *conn, ids).await?;
        check_membership(ids, &participants, round.category_id)?;

        let assigned =
            HeatRepository::find_assigned_elsewhere(conn, round.id, exclude_heat_id, ids).await?;
        if let Some((participant_id, heat_number)) = assigned.first() {
            return Err(AppError::Conflict(format!(
                "Participant {participant_id} is already in heat {heat_number} of this round"
            )));
        }

        Ok(())
    }
}

/// Check a loaded selection against the requested ids and the round's category
fn check_membership(ids: &[i64], participants: &[Participant], category_id: i64) -> AppResult<()> {
    if let Some(missing) = ids
        .iter()
        .find(|id| !participants.iter().any(|p| p.id == **id))
    {
        return Err(AppError::NotFound(format!(
            "{}: {missing}",
            messages::PARTICIPANT_NOT_FOUND
        )));
    }

    if let Some(outsider) = participants.iter().find(|p| p.category_id != category_id) {
        return Err(AppError::Validation(format!(
            "Participant {} is not registered in this round's category",
            outsider.id
        )));
    }

    Ok(())
}

fn into_response(heat: Heat, members: Vec<HeatParticipant>) -> HeatResponse {
    HeatResponse::new(
        heat,
        members.into_iter().map(HeatParticipantResponse::from).collect(),
    )
}

/// Attach members to their heats, keeping the heat order
fn assemble(heats: Vec<Heat>, members: Vec<HeatParticipant>) -> Vec<HeatResponse> {
    let mut by_heat: HashMap<i64, Vec<HeatParticipantResponse>> = HashMap::new();
    for member in members {
        by_heat
            .entry(member.heat_id)
            .or_default()
            .push(member.into());
    }

    heats
        .into_iter()
        .map(|heat| {
            let participants = by_heat.remove(&heat.id).unwrap_or_default();
            HeatResponse::new(heat, participants)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: i64, category_id: i64) -> Participant {
        Participant {
            id,
            competition_id: 1,
            category_id,
            first_name: "P".to_string(),
            last_name: id.to_string(),
            number: None,
            role: None,
            gender: None,
        }
    }

    fn heat(id: i64, heat_number: i32) -> Heat {
        Heat {
            id,
            round_id: 1,
            heat_number,
            status: HeatStatus::Waiting,
        }
    }

    fn member(heat_id: i64, participant_id: i64) -> HeatParticipant {
        HeatParticipant {
            heat_id,
            participant_id,
            participant_name: format!("P {participant_id}"),
        }
    }

    #[test]
    fn test_selection_in_category_passes() {
        let loaded = vec![participant(1, 7), participant(2, 7)];
        assert!(check_membership(&[1, 2], &loaded, 7).is_ok());
    }

    #[test]
    fn test_unknown_participant_is_not_found() {
        let loaded = vec![participant(1, 7)];
        let err = check_membership(&[1, 9], &loaded, 7).unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m.ends_with(": 9")));
    }

    #[test]
    fn test_participant_from_other_category_is_rejected() {
        let loaded = vec![participant(1, 7), participant(2, 8)];
        let err = check_membership(&[1, 2], &loaded, 7).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_assemble_keeps_heat_order_and_empty_heats() {
        let heats = vec![heat(10, 1), heat(11, 2), heat(12, 3)];
        let members = vec![member(11, 4), member(10, 1), member(10, 2)];

        let assembled = assemble(heats, members);

        let numbers: Vec<i32> = assembled.iter().map(|h| h.heat_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(assembled[0].participants.len(), 2);
        assert_eq!(assembled[1].participants[0].participant_id, 4);
        assert!(assembled[2].participants.is_empty());
    }
}
