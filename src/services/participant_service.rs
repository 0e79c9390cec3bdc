//! Participant service

use sqlx::PgPool;

use crate::{
    constants::messages,
    db::repositories::{CompetitionRepository, HeatRepository, ParticipantRepository},
    error::{AppError, AppResult},
    handlers::participants::{
        request::{CreateParticipantRequest, UpdateParticipantRequest},
        response::ParticipantResponse,
    },
    utils::{sanitize_optional, sanitize_string, split_full_name, validate_person_name},
};

/// Participant service for business logic
pub struct ParticipantService;

impl ParticipantService {
    /// Participants of a competition, optionally narrowed to one category
    pub async fn list_participants(
        pool: &PgPool,
        competition_id: i64,
        category_id: Option<i64>,
    ) -> AppResult<Vec<ParticipantResponse>> {
        CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::COMPETITION_NOT_FOUND.to_string()))?;

        let participants = ParticipantRepository::list(pool, competition_id, category_id).await?;
        Ok(participants
            .into_iter()
            .map(ParticipantResponse::from)
            .collect())
    }

    /// Register a participant in a category of the competition
    pub async fn create_participant(
        pool: &PgPool,
        competition_id: i64,
        payload: CreateParticipantRequest,
    ) -> AppResult<ParticipantResponse> {
        let (first_name, last_name) = resolve_names(&payload)?;

        Self::ensure_category_in_competition(pool, competition_id, payload.category_id).await?;

        let role = sanitize_optional(payload.role.as_deref());
        let participant = ParticipantRepository::create(
            pool,
            competition_id,
            payload.category_id,
            &first_name,
            &last_name,
            payload.number,
            role.as_deref(),
            payload.gender,
        )
        .await?;

        tracing::info!(
            participant_id = participant.id,
            competition_id,
            category_id = participant.category_id,
            "Participant registered"
        );

        Ok(participant.into())
    }

    /// Edit a participant; absent fields keep their value.
    ///
    /// The participant row stays locked until commit, so a heat mutation
    /// cannot place them while their category is being changed.
    pub async fn update_participant(
        pool: &PgPool,
        competition_id: i64,
        participant_id: i64,
        payload: UpdateParticipantRequest,
    ) -> AppResult<ParticipantResponse> {
        if payload.is_empty() {
            return Err(AppError::Validation(messages::NOTHING_TO_UPDATE.to_string()));
        }

        let names = match payload.full_name.as_deref() {
            Some(full_name) => Some(
                split_full_name(&sanitize_string(full_name))
                    .map_err(|e| AppError::Validation(e.to_string()))?,
            ),
            None => None,
        };

        if let Some(category_id) = payload.category_id {
            Self::ensure_category_in_competition(pool, competition_id, category_id).await?;
        }

        let mut tx = pool.begin().await?;

        let existing = ParticipantRepository::lock(&mut tx, participant_id)
            .await?
            .filter(|p| p.competition_id == competition_id)
            .ok_or_else(|| AppError::NotFound(messages::PARTICIPANT_NOT_FOUND.to_string()))?;

        if payload
            .category_id
            .is_some_and(|category_id| category_id != existing.category_id)
        {
            let in_heats = HeatRepository::has_memberships(&mut tx, existing.id).await?;
            check_category_change(existing.category_id, payload.category_id, in_heats)?;
        }

        let role = sanitize_optional(payload.role.as_deref());
        let participant = ParticipantRepository::update(
            &mut tx,
            existing.id,
            names.as_ref().map(|(first, _)| first.as_str()),
            names.as_ref().map(|(_, last)| last.as_str()),
            payload.number,
            role.as_deref(),
            payload.gender,
            payload.category_id,
        )
        .await?;

        tx.commit().await?;

        if participant.category_id != existing.category_id {
            tracing::info!(
                participant_id = participant.id,
                from = existing.category_id,
                to = participant.category_id,
                "Participant moved to another category"
            );
        }

        Ok(participant.into())
    }

    async fn ensure_category_in_competition(
        pool: &PgPool,
        competition_id: i64,
        category_id: i64,
    ) -> AppResult<()> {
        let category = CompetitionRepository::find_category(pool, category_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::CATEGORY_NOT_FOUND.to_string()))?;

        if category.competition_id != competition_id {
            return Err(AppError::Validation(
                "Category does not belong to this competition".to_string(),
            ));
        }

        Ok(())
    }
}

/// Heat members must stay in their round's category
fn check_category_change(current: i64, requested: Option<i64>, in_heats: bool) -> AppResult<()> {
    match requested {
        Some(category_id) if category_id != current && in_heats => Err(AppError::Conflict(
            "Participant is assigned to heats; remove them from those heats before changing category"
                .to_string(),
        )),
        _ => Ok(()),
    }
}

/// Take the name from `full_name` when present, else from the split fields
fn resolve_names(payload: &CreateParticipantRequest) -> AppResult<(String, String)> {
    if let Some(full_name) = payload.full_name.as_deref() {
        return split_full_name(&sanitize_string(full_name))
            .map_err(|e| AppError::Validation(e.to_string()));
    }

    match (payload.first_name.as_deref(), payload.last_name.as_deref()) {
        (Some(first), Some(last)) => {
            let first = sanitize_string(first);
            let last = sanitize_string(last);
            validate_person_name(&first).map_err(|e| AppError::Validation(e.to_string()))?;
            validate_person_name(&last).map_err(|e| AppError::Validation(e.to_string()))?;
            Ok((first, last))
        }
        _ => Err(AppError::Validation(
            "Provide full_name or both first_name and last_name".to_string(),
        )),
    }
}
