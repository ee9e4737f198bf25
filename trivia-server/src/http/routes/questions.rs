//! Question endpoints

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::envelope::{self, Empty, Envelope};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiQuery, PathId};
use crate::models::{
    category_map, CategoryMap, CreateQuestionRequest, NewQuestion, PageParams, Pagination,
    Question, SearchRequest,
};
use crate::state::AppState;

/// One page of questions plus the category lookup
#[derive(Serialize)]
pub struct QuestionPageResponse {
    pub questions: Vec<Question>,
    /// Unpaginated count
    pub total_questions: usize,
    pub categories: CategoryMap,
    /// Always null; the listing is not filtered by category
    pub current_category: Option<String>,
}

/// Search results
#[derive(Serialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// GET /questions?page=N
async fn list_questions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Json<Envelope<QuestionPageResponse>>, ApiError> {
    let page = Pagination::from(params);
    let store = state.store();

    let all = store.list_questions().await?;
    let categories = store.list_categories().await?;
    tracing::debug!(page = page.page, total = all.len(), "listed questions");

    Ok(Envelope::ok(QuestionPageResponse {
        questions: page.slice(&all).to_vec(),
        total_questions: all.len(),
        categories: category_map(categories),
        current_category: None,
    }))
}

/// POST /questions
async fn create_question(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<Json<Envelope<Empty>>, ApiError> {
    let new = NewQuestion::try_from(req)?;

    let created = state
        .store()
        .insert_question(new)
        .await
        .map_err(ApiError::unprocessable)?;
    tracing::info!(id = created.id, category = created.category, "question created");

    Ok(envelope::success())
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<Envelope<Empty>>, ApiError> {
    let store = state.store();

    if store.find_question(id).await?.is_none() {
        return Err(ApiError::not_found("question", id));
    }

    store
        .delete_question(id)
        .await
        .map_err(ApiError::unprocessable)?;
    tracing::info!(id, "question deleted");

    Ok(envelope::success())
}

/// POST /questions/search - case-insensitive substring match on the text
async fn search_questions(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<Envelope<SearchResponse>>, ApiError> {
    let questions = state.store().search_questions(req.term()).await?;
    tracing::debug!(term = req.term(), hits = questions.len(), "searched questions");

    Ok(Envelope::ok(SearchResponse {
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
