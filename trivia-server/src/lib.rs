//! trivia-server: HTTP API over a trivia question bank
//!
//! Lists categories and questions, creates, deletes and searches questions,
//! and hands out random unseen questions for quiz play. Handlers talk to the
//! data through the [`db::TriviaStore`] trait, backed by PostgreSQL in
//! production and by [`db::MemoryStore`] in tests.

pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;
pub mod tracing_setup;

pub use error::{Error, Result};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
