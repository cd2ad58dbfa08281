// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use rand::seq::SliceRandom;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{error::ApiError, models::question::Question, store};

/// Category selector sent by the play client. `id` 0 is how the frontend
/// encodes "all categories"; any id that doesn't match a category gets the
/// same all-categories treatment.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Picks one question from `pool` whose id is not in `previous`, uniformly
/// at random. Returns `None` when the whole pool has been served.
///
/// The emptiness check runs before any draw; resampling until an unseen
/// question turns up would never terminate on an exhausted pool.
fn pick_question(pool: Vec<Question>, previous: &[i64]) -> Option<Question> {
    let eligible: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    if eligible.is_empty() {
        return None;
    }

    let mut rng = rand::thread_rng();
    eligible.choose(&mut rng).cloned()
}

/// POST /quizzes
///
/// Stateless: the set of already-served question ids arrives with every
/// request. An exhausted pool is a success carrying `question: null`, not an
/// error.
pub async fn play_quiz(
    State(pool): State<SqlitePool>,
    Json(req): Json<QuizRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Resolve the candidate pool. An unrecognized category id falls back to
    // all questions; that is the endpoint's contract, not an error.
    let candidates = match req.quiz_category {
        Some(ref cat) if store::find_category(&pool, cat.id).await?.is_some() => {
            store::questions_in_category(&pool, cat.id).await?
        }
        _ => store::list_questions(&pool).await?,
    };

    let question = pick_question(candidates, &req.previous_questions);

    Ok(Json(serde_json::json!({
        "success": true,
        "question": question,
    })))
}
