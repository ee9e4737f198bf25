//! Quiz endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::envelope::Envelope;
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::models::{pick_next, QuizOutcome, QuizRequest, QuizScope};
use crate::state::AppState;

/// Next quiz question, `false` when none are left
#[derive(Serialize)]
pub struct QuizResponse {
    pub question: QuizOutcome,
}

/// POST /quizzes - random unseen question from the chosen category (0 = all)
async fn next_question(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<Envelope<QuizResponse>>, ApiError> {
    let scope = QuizScope::from(&req);
    let candidates = state
        .store()
        .quiz_candidates(scope, &req.previous_questions)
        .await?;
    let pool_size = candidates.len();

    let question = pick_next(candidates, &mut rand::thread_rng());
    tracing::debug!(
        ?scope,
        seen = req.previous_questions.len(),
        pool_size,
        finished = matches!(question, QuizOutcome::Finished),
        "quiz draw"
    );

    Ok(Envelope::ok(QuizResponse { question }))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}
