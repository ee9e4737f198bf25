//! Domain models with validation at construction
//!
//! Request bodies deserialize into typed structs; anything that must hold
//! before touching the store is checked when building the domain type.
//! Invalid input returns ValidationError, not panic.

pub mod category;
pub mod lenient;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod validation;

pub use category::{category_map, Category, CategoryMap};
pub use pagination::{PageParams, Pagination, QUESTIONS_PER_PAGE};
pub use question::{CreateQuestionRequest, NewQuestion, Question, SearchRequest};
pub use quiz::{pick_next, QuizOutcome, QuizRequest, QuizScope};
pub use validation::ValidationError;
