//! Trivia questions

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::lenient::int_or_string;
use super::ValidationError;

/// Lowest accepted difficulty score
pub const MIN_DIFFICULTY: i32 = 1;

/// Highest accepted difficulty score
pub const MAX_DIFFICULTY: i32 = 5;

/// Question record, serialized as `{id, question, answer, category, difficulty}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Body of `POST /questions`
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "int_or_string")]
    pub category: i32,
    #[serde(deserialize_with = "int_or_string")]
    pub difficulty: i32,
}

/// Validated question ready for insertion.
///
/// `category` is not checked here; the store's foreign key rejects unknown ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl NewQuestion {
    /// Validate question text, answer and difficulty.
    ///
    /// # Example
    /// ```
    /// use trivia_server::models::NewQuestion;
    ///
    /// assert!(NewQuestion::new("Who wrote Hamlet?", "Shakespeare", 4, 2).is_ok());
    /// assert!(NewQuestion::new("   ", "Shakespeare", 4, 2).is_err());
    /// assert!(NewQuestion::new("Who wrote Hamlet?", "Shakespeare", 4, 7).is_err());
    /// ```
    pub fn new(
        question: &str,
        answer: &str,
        category: i32,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ValidationError::Empty { field: "question" });
        }

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(ValidationError::Empty { field: "answer" });
        }

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: MIN_DIFFICULTY,
                max: MAX_DIFFICULTY,
                value: difficulty,
            });
        }

        Ok(Self {
            question: question.to_owned(),
            answer: answer.to_owned(),
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> i32 {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attach the id assigned by the store.
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ValidationError;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        Self::new(&req.question, &req.answer, req.category, req.difficulty)
    }
}

/// Body of `POST /questions/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    /// Absent means "match everything", same as an empty term
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

impl SearchRequest {
    pub fn term(&self) -> &str {
        self.search_term.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_text() {
        let q = NewQuestion::new("  What is H2O?  ", " Water ", 1, 1).unwrap();
        assert_eq!(q.question(), "What is H2O?");
        assert_eq!(q.answer(), "Water");
    }

    #[test]
    fn rejects_blank_fields() {
        let err = NewQuestion::new("", "x", 1, 1).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "question" });

        let err = NewQuestion::new("q", "\n\t", 1, 1).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "answer" });
    }

    #[test]
    fn difficulty_bounds() {
        assert!(NewQuestion::new("q", "a", 1, MIN_DIFFICULTY).is_ok());
        assert!(NewQuestion::new("q", "a", 1, MAX_DIFFICULTY).is_ok());
        assert!(matches!(
            NewQuestion::new("q", "a", 1, 0),
            Err(ValidationError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            NewQuestion::new("q", "a", 1, 6),
            Err(ValidationError::OutOfRange { value: 6, .. })
        ));
    }

    #[test]
    fn request_accepts_string_numbers() {
        let req: CreateQuestionRequest = serde_json::from_str(
            r#"{"question": "helloo", "answer": "goodbye", "category": "2", "difficulty": "5"}"#,
        )
        .unwrap();
        let q = NewQuestion::try_from(req).unwrap();
        assert_eq!(q.category(), 2);
        assert_eq!(q.difficulty(), 5);
    }

    #[test]
    fn request_requires_every_field() {
        let res = serde_json::from_str::<CreateQuestionRequest>(
            r#"{"question": "q", "answer": "a", "category": 1}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn question_serializes_flat() {
        let q = NewQuestion::new("q", "a", 3, 2).unwrap().into_question(7);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "question": "q", "answer": "a", "category": 3, "difficulty": 2})
        );
    }

    #[test]
    fn search_term_defaults_to_empty() {
        let req: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.term(), "");

        let req: SearchRequest = serde_json::from_str(r#"{"searchTerm": "title"}"#).unwrap();
        assert_eq!(req.term(), "title");
    }
}
