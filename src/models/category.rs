// src/models/category.rs

use serde::Serialize;
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
/// Categories are seeded by migration and read-only through the API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: i64,

    /// Display name of the category (e.g. "Science").
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}
