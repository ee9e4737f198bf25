//! Quiz play: candidate scoping and random selection

use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize, Serializer};

use super::lenient::int_or_string;
use super::Question;

/// Category id the client sends to mean "all categories"
pub const ALL_CATEGORIES: i32 = 0;

/// Body of `POST /quizzes`
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    #[serde(default)]
    pub previous_questions: Vec<i32>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "int_or_string")]
    pub id: i32,
}

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i32),
}

impl QuizScope {
    pub fn from_category_id(id: i32) -> Self {
        if id == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(id)
        }
    }

    /// Category filter, `None` for [`QuizScope::All`].
    pub fn category(&self) -> Option<i32> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(*id),
        }
    }
}

impl From<&QuizRequest> for QuizScope {
    fn from(req: &QuizRequest) -> Self {
        Self::from_category_id(req.quiz_category.id)
    }
}

/// Next quiz question, or `false` once the pool is exhausted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Next(Question),
    Finished,
}

impl Serialize for QuizOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Next(question) => question.serialize(serializer),
            Self::Finished => serializer.serialize_bool(false),
        }
    }
}

/// Draw one candidate uniformly at random.
pub fn pick_next<R: Rng + ?Sized>(candidates: Vec<Question>, rng: &mut R) -> QuizOutcome {
    match candidates.into_iter().choose(rng) {
        Some(question) => QuizOutcome::Next(question),
        None => QuizOutcome::Finished,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i32) -> Question {
        Question {
            id,
            question: format!("q{}", id),
            answer: format!("a{}", id),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn zero_means_all_categories() {
        assert_eq!(QuizScope::from_category_id(0), QuizScope::All);
        assert_eq!(QuizScope::from_category_id(4), QuizScope::Category(4));
        assert_eq!(QuizScope::All.category(), None);
        assert_eq!(QuizScope::Category(4).category(), Some(4));
    }

    #[test]
    fn empty_pool_finishes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_next(Vec::new(), &mut rng), QuizOutcome::Finished);
    }

    #[test]
    fn picks_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            match pick_next(vec![question(3), question(8), question(11)], &mut rng) {
                QuizOutcome::Next(q) => assert!([3, 8, 11].contains(&q.id)),
                QuizOutcome::Finished => panic!("pool was not empty"),
            }
        }
    }

    #[test]
    fn every_candidate_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..500 {
            if let QuizOutcome::Next(q) = pick_next((1..=4).map(question).collect(), &mut rng) {
                seen.insert(q.id);
            }
        }
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn outcome_serialization() {
        assert_eq!(
            serde_json::to_value(QuizOutcome::Finished).unwrap(),
            serde_json::json!(false)
        );
        let json = serde_json::to_value(QuizOutcome::Next(question(2))).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["answer"], "a2");
    }

    #[test]
    fn request_parsing() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"quiz_category": {"type": "Geography", "id": "3"}, "previous_questions": [5, 9]}"#,
        )
        .unwrap();
        assert_eq!(QuizScope::from(&req), QuizScope::Category(3));
        assert_eq!(req.previous_questions, vec![5, 9]);

        let req: QuizRequest = serde_json::from_str(r#"{"quiz_category": {"id": 0}}"#).unwrap();
        assert_eq!(QuizScope::from(&req), QuizScope::All);
        assert!(req.previous_questions.is_empty());

        assert!(serde_json::from_str::<QuizRequest>(r#"{"previous_questions": []}"#).is_err());
    }
}
