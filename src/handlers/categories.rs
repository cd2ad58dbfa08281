// src/handlers/categories.rs

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{error::ApiError, store};

/// Builds the id -> display name mapping consumed by the category listing
/// and the paginated question listing. A `BTreeMap` keyed by id keeps the
/// mapping in identifier order; an empty store yields an empty mapping.
pub async fn category_map(pool: &SqlitePool) -> Result<BTreeMap<i64, String>, ApiError> {
    let categories = store::list_categories(pool).await?;
    Ok(categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect())
}

/// GET /categories
pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = category_map(&pool).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "categories": categories,
    })))
}

/// GET /categories/{id}/questions
///
/// An unknown category id is a 404. A known category with no questions is a
/// success with an empty list.
pub async fn category_questions(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let category = store::find_category(&pool, category_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let questions = store::questions_in_category(&pool, category_id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "total_questions": questions.len(),
        "questions": questions,
        "current_category": category.category_type,
    })))
}
