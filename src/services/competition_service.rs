//! Competition service

use std::collections::HashMap;

use futures::future::try_join_all;
use sqlx::PgPool;

use crate::{
    constants::messages,
    db::repositories::CompetitionRepository,
    error::{AppError, AppResult},
    handlers::competitions::{
        request::{CreateCategoryRequest, CreateCompetitionRequest},
        response::{CategoryResponse, CompetitionResponse, CriterionResponse},
    },
    models::{Category, Competition},
    utils::{normalize_criteria, parse_competition_date, sanitize_optional, sanitize_string},
};

/// Competition service for business logic
pub struct CompetitionService;

impl CompetitionService {
    /// List competitions, newest first, each with its categories
    pub async fn list_competitions(pool: &PgPool) -> AppResult<Vec<CompetitionResponse>> {
        let competitions = CompetitionRepository::list(pool).await?;

        try_join_all(
            competitions
                .into_iter()
                .map(|competition| Self::to_competition_response(pool, competition)),
        )
        .await
    }

    /// Create a new competition
    pub async fn create_competition(
        pool: &PgPool,
        payload: CreateCompetitionRequest,
    ) -> AppResult<CompetitionResponse> {
        let title = sanitize_string(&payload.title);
        if title.is_empty() {
            return Err(AppError::Validation("Title cannot be empty".to_string()));
        }

        let date = parse_competition_date(payload.date.as_deref())
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let location = sanitize_optional(payload.location.as_deref());

        let competition =
            CompetitionRepository::create(pool, &title, date, location.as_deref()).await?;

        tracing::info!(competition_id = competition.id, "Competition created");

        Ok(CompetitionResponse::new(competition, Vec::new()))
    }

    /// Get a competition with nested categories and criteria
    pub async fn get_competition(pool: &PgPool, id: i64) -> AppResult<CompetitionResponse> {
        let competition = CompetitionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::COMPETITION_NOT_FOUND.to_string()))?;

        Self::to_competition_response(pool, competition).await
    }

    /// Create a category and its criteria in one transaction
    pub async fn create_category(
        pool: &PgPool,
        competition_id: i64,
        payload: CreateCategoryRequest,
    ) -> AppResult<CategoryResponse> {
        let name = sanitize_string(&payload.name);
        if name.is_empty() {
            return Err(AppError::Validation(
                "Category name cannot be empty".to_string(),
            ));
        }

        let criteria = normalize_criteria(&payload.criteria)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::COMPETITION_NOT_FOUND.to_string()))?;

        let names: Vec<String> = criteria.iter().map(|c| c.name.clone()).collect();
        let scale_mins: Vec<f64> = criteria.iter().map(|c| c.scale_min).collect();
        let scale_maxs: Vec<f64> = criteria.iter().map(|c| c.scale_max).collect();

        let mut tx = pool.begin().await?;
        let category = CompetitionRepository::create_category(
            &mut tx,
            competition_id,
            &name,
            payload.category_type,
        )
        .await?;
        let created = CompetitionRepository::create_criteria(
            &mut tx,
            category.id,
            &names,
            &scale_mins,
            &scale_maxs,
        )
        .await?;
        tx.commit().await?;

        tracing::info!(
            competition_id,
            category_id = category.id,
            criteria = created.len(),
            "Category created"
        );

        Ok(CategoryResponse::new(
            category,
            created.into_iter().map(CriterionResponse::from).collect(),
        ))
    }

    async fn to_competition_response(
        pool: &PgPool,
        competition: Competition,
    ) -> AppResult<CompetitionResponse> {
        let categories = CompetitionRepository::list_categories(pool, competition.id).await?;
        let categories = Self::with_criteria(pool, categories).await?;

        Ok(CompetitionResponse::new(competition, categories))
    }

    /// Attach criteria to categories with a single query
    async fn with_criteria(
        pool: &PgPool,
        categories: Vec<Category>,
    ) -> AppResult<Vec<CategoryResponse>> {
        let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
        let mut by_category: HashMap<i64, Vec<CriterionResponse>> = HashMap::new();
        for criterion in CompetitionRepository::list_criteria(pool, &ids).await? {
            by_category
                .entry(criterion.category_id)
                .or_default()
                .push(criterion.into());
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let criteria = by_category.remove(&category.id).unwrap_or_default();
                CategoryResponse::new(category, criteria)
            })
            .collect())
    }
}
