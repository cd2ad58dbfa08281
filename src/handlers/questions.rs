// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    error::ApiError,
    handlers::categories::category_map,
    models::question::CreateQuestionRequest,
    pagination::{paginate, parse_page},
    state::AppState,
    store,
};

/// Query parameters for the paginated question listing.
/// `page` stays a string so garbage input can fall back to page 1 instead of
/// being rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

/// GET /questions?page=N
///
/// An empty page is a 404, even page 1 of an empty store; the total count is
/// taken before pagination.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page = parse_page(params.page.as_deref());

    let all = store::list_questions(&state.pool).await?;
    let current = paginate(&all, page, state.config.page_size);

    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = category_map(&state.pool).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": current,
        "total_questions": all.len(),
        "categories": categories,
        "current_category": serde_json::Value::Null,
    })))
}

/// POST /questions
///
/// All four fields must be present and well-typed, the difficulty in 1..=5,
/// and the category id must reference an existing category. Anything else,
/// including a store failure, reports as 422.
pub async fn create_question(
    State(pool): State<sqlx::SqlitePool>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let payload: CreateQuestionRequest =
        serde_json::from_value(body).map_err(|_| ApiError::Unprocessable)?;

    payload.validate().map_err(|_| ApiError::Unprocessable)?;

    // Reject orphaned category references at write time.
    store::find_category(&pool, payload.category)
        .await?
        .ok_or(ApiError::Unprocessable)?;

    let id = store::insert_question(&pool, &payload).await.map_err(|e| {
        tracing::error!("Failed to insert question: {:?}", e);
        ApiError::Unprocessable
    })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "created": id,
        "message": "question successfully created",
    })))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(pool): State<sqlx::SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = store::delete_question(&pool, id).await?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "deleted": id,
        "message": "question successfully deleted",
    })))
}

/// Request body for the search endpoint. The client sends `searchTerm`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

/// POST /questions/search
///
/// Zero matches is a success with an empty list, never a 404. This is
/// deliberately asymmetric with the paginated listing.
pub async fn search_questions(
    State(pool): State<sqlx::SqlitePool>,
    Json(body): Json<SearchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let questions = store::search_questions(&pool, &body.search_term).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "total_questions": questions.len(),
        "questions": questions,
        "current_category": serde_json::Value::Null,
    })))
}
