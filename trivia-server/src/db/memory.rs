//! In-memory store for tests and local demos
//!
//! Mirrors the PostgreSQL schema closely enough for handler tests: ids are
//! assigned from a counter and inserts referencing a missing category fail
//! like the foreign key would.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{StoreError, TriviaStore};
use crate::models::{Category, NewQuestion, Question, QuizScope};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    last_question_id: i32,
}

/// Store holding everything in ordered maps behind a RwLock
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store preloaded with categories and questions.
    ///
    /// Question ids are kept as given; new inserts continue after the highest.
    pub fn with_data(
        categories: impl IntoIterator<Item = Category>,
        questions: impl IntoIterator<Item = Question>,
    ) -> Self {
        let categories: BTreeMap<i32, Category> =
            categories.into_iter().map(|c| (c.id, c)).collect();
        let questions: BTreeMap<i32, Question> =
            questions.into_iter().map(|q| (q.id, q)).collect();
        let last_question_id = questions.keys().next_back().copied().unwrap_or(0);

        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                last_question_id,
            }),
        }
    }

    fn filtered(tables: &Tables, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        tables.questions.values().filter(|&q| keep(q)).cloned().collect()
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>, StoreError> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut tables = self.tables.write().await;

        if !tables.categories.contains_key(&question.category()) {
            return Err(StoreError::Constraint(format!(
                "category {} does not exist",
                question.category()
            )));
        }

        let id = tables
            .last_question_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Constraint("question id space exhausted".into()))?;
        tables.last_question_id = id;

        let stored = question.into_question(id);
        tables.questions.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, id: i32) -> Result<(), StoreError> {
        self.tables
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("question", id))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(Self::filtered(&tables, |q| {
            q.question.to_lowercase().contains(&needle)
        }))
    }

    async fn questions_by_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        let tables = self.tables.read().await;
        Ok(Self::filtered(&tables, |q| q.category == category))
    }

    async fn quiz_candidates(
        &self,
        scope: QuizScope,
        exclude: &[i32],
    ) -> Result<Vec<Question>, StoreError> {
        let tables = self.tables.read().await;
        Ok(Self::filtered(&tables, |q| {
            scope.category().map_or(true, |c| q.category == c) && !exclude.contains(&q.id)
        }))
    }
}
