// src/routes.rs

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::ApiError,
    handlers::{categories, questions, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Wires all endpoints to their handlers.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    // Trusted-client API: every origin may call every route, without
    // credential-bearing headers.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(categories::category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/questions/search", post(questions::search_questions))
        .route("/quizzes", post(quiz::play_quiz))
        // Unknown paths and known paths with undefined verbs both answer
        // with the standard JSON envelope instead of axum's bare defaults.
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
