//! PostgreSQL store
//!
//! Query patterns:
//! - ascending id ordering on every list
//! - writes rely on DB constraints; violations surface as `StoreError::Constraint`
//! - search uses `strpos` so `%` and `_` in the term are literal

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::PgPool;

use super::store::{StoreError, TriviaStore};
use crate::models::{Category, NewQuestion, Question, QuizScope};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Store backed by a shared PgPool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Split integrity violations out of generic database failures.
fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.kind() {
            ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
            | ErrorKind::UniqueViolation => {
                return StoreError::Constraint(db_err.message().to_owned());
            }
            _ => {}
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        let row = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>, StoreError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1");
        let row = sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let sql = format!(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING {QUESTION_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Question>(&sql)
            .bind(question.question())
            .bind(question.answer())
            .bind(question.category())
            .bind(question.difficulty())
            .fetch_one(&self.pool)
            .await
            .map_err(classify)
    }

    async fn delete_question(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("question", id));
        }
        Ok(())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE strpos(lower(question), lower($1)) > 0 ORDER BY id"
        );
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(term)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn questions_by_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn quiz_candidates(
        &self,
        scope: QuizScope,
        exclude: &[i32],
    ) -> Result<Vec<Question>, StoreError> {
        let sql = format!(
            r#"
            SELECT {QUESTION_COLUMNS} FROM questions
            WHERE ($1::INTEGER IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#
        );
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(scope.category())
            .bind(exclude.to_vec())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Run with: DATABASE_URL=postgres://... cargo test -p trivia-server -- --ignored
    // The tests create their own rows and remove them afterwards.

    async fn store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        migrations::seed_categories(&pool).await.expect("seed failed");
        PgStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_search_delete_round() {
        let store = store().await;
        let new = NewQuestion::new("Which planet has the %_zqx rings?", "Saturn", 1, 2).unwrap();
        let created = store.insert_question(new).await.unwrap();

        let found = store.search_questions("%_ZQX").await.unwrap();
        assert_eq!(found.iter().filter(|q| q.id == created.id).count(), 1);

        store.delete_question(created.id).await.unwrap();
        assert!(store.find_question(created.id).await.unwrap().is_none());
        assert!(matches!(
            store.delete_question(created.id).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_category_is_constraint_violation() {
        let store = store().await;
        let new = NewQuestion::new("orphan?", "yes", 987_654, 1).unwrap();
        assert!(matches!(
            store.insert_question(new).await,
            Err(StoreError::Constraint(_))
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn quiz_candidates_exclude_previous() {
        let store = store().await;
        let a = store
            .insert_question(NewQuestion::new("quiz a", "a", 6, 1).unwrap())
            .await
            .unwrap();
        let b = store
            .insert_question(NewQuestion::new("quiz b", "b", 6, 1).unwrap())
            .await
            .unwrap();

        let pool = store
            .quiz_candidates(QuizScope::Category(6), &[a.id])
            .await
            .unwrap();
        assert!(pool.iter().all(|q| q.category == 6 && q.id != a.id));
        assert!(pool.iter().any(|q| q.id == b.id));

        store.delete_question(a.id).await.unwrap();
        store.delete_question(b.id).await.unwrap();
    }
}
