// src/store.rs

use sqlx::SqlitePool;

use crate::models::{category::Category, question::{CreateQuestionRequest, Question}};

/// Data-access layer. Handlers go through these functions so no SQL lives in
/// the request path and no store-native row ever reaches the response layer
/// unserialized.

/// All categories, ordered by id.
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

/// A single category by id, if it exists.
pub async fn find_category(pool: &SqlitePool, id: i64) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// All questions, ordered by id.
pub async fn list_questions(pool: &SqlitePool) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// A single question by id, if it exists.
pub async fn find_question(pool: &SqlitePool, id: i64) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// All questions in a category, ordered by id.
pub async fn questions_in_category(
    pool: &SqlitePool,
    category_id: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE category = ?1 ORDER BY id",
    )
    .bind(category_id)
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring search on the question text, ordered by id.
pub async fn search_questions(
    pool: &SqlitePool,
    term: &str,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE LOWER(question) LIKE '%' || LOWER(?1) || '%' ORDER BY id",
    )
    .bind(term)
    .fetch_all(pool)
    .await
}

/// Inserts a question and returns the id assigned by the store.
pub async fn insert_question(
    pool: &SqlitePool,
    new: &CreateQuestionRequest,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&new.question)
    .bind(&new.answer)
    .bind(new.category)
    .bind(new.difficulty)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Deletes a question by id. Returns false when no row matched.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
