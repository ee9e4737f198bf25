//! Category endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::extractors::PathId;
use crate::models::{category_map, CategoryMap, Question};
use crate::state::AppState;

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

/// Questions filtered to one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// GET /categories - id -> label for every category
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Envelope<CategoriesResponse>>, ApiError> {
    let categories = state.store().list_categories().await?;
    tracing::debug!(count = categories.len(), "listed categories");

    Ok(Envelope::ok(CategoriesResponse {
        categories: category_map(categories),
    }))
}

/// GET /categories/{id}/questions - questions in one category
async fn category_questions(
    State(state): State<AppState>,
    PathId(category_id): PathId,
) -> Result<Json<Envelope<CategoryQuestionsResponse>>, ApiError> {
    let store = state.store();
    let category = store
        .find_category(category_id)
        .await?
        .ok_or_else(|| ApiError::not_found("category", category_id))?;

    let questions = store.questions_by_category(category.id).await?;
    tracing::debug!(category = category.id, count = questions.len(), "listed category questions");

    Ok(Envelope::ok(CategoryQuestionsResponse {
        total_questions: questions.len(),
        questions,
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
