// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
///
/// This is also the wire shape: every endpoint serializes questions as
/// `{id, question, answer, category, difficulty}`, never raw rows of some
/// other shape.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: i64,

    /// The question text.
    pub question: String,

    /// The answer text.
    pub answer: String,

    /// Identifier of the category this question belongs to.
    /// Linkage is by id, never by the category's display name.
    pub category: i64,

    /// Difficulty rating, 1 (easiest) through 5 (hardest).
    pub difficulty: i64,
}

/// DTO for creating a new question. All four fields are required; a request
/// missing any of them is rejected before validation runs.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,
    #[validate(length(min = 1, max = 500))]
    pub answer: String,
    #[validate(range(min = 1))]
    pub category: i64,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i64,
}
