//! Data access capability handed to every handler

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Question, QuizScope};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("constraint violation: {0}")]
    Constraint(String),
}

impl StoreError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Trivia data access.
///
/// Every list operation returns rows in ascending id order.
#[async_trait]
pub trait TriviaStore: Send + Sync + 'static {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError>;

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    async fn find_question(&self, id: i32) -> Result<Option<Question>, StoreError>;

    /// Insert a question and return it with its assigned id.
    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Delete a question; [`StoreError::NotFound`] if no row was removed.
    async fn delete_question(&self, id: i32) -> Result<(), StoreError>;

    /// Case-insensitive literal substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn questions_by_category(&self, category: i32) -> Result<Vec<Question>, StoreError>;

    /// Questions in `scope` whose id is not in `exclude`.
    async fn quiz_candidates(
        &self,
        scope: QuizScope,
        exclude: &[i32],
    ) -> Result<Vec<Question>, StoreError>;
}
