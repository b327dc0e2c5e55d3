//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use trivia_core::error::AppError;
use trivia_core::result::AppResult;
use trivia_core::types::CategoryId;
use trivia_core::types::id::deserialize_lenient_opt;
use trivia_entity::question::CreateQuestion;

/// Create question request body.
///
/// Every field is required; `category` and `difficulty` may be numbers or
/// numeric strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    /// Question text.
    #[validate(required(message = "question is required"), length(min = 1))]
    pub question: Option<String>,
    /// Answer text.
    #[validate(required(message = "answer is required"), length(min = 1))]
    pub answer: Option<String>,
    /// Owning category.
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    #[validate(required(message = "category is required"))]
    pub category: Option<CategoryId>,
    /// Difficulty rating.
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    #[validate(required(message = "difficulty is required"))]
    pub difficulty: Option<i32>,
}

impl CreateQuestionRequest {
    /// Validate and convert into the store's insert payload.
    ///
    /// A missing or empty field is `Unprocessable`.
    pub fn into_create(self) -> AppResult<CreateQuestion> {
        self.validate()
            .map_err(|e| AppError::unprocessable(format!("Invalid question: {e}")))?;

        match (self.question, self.answer, self.category, self.difficulty) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(CreateQuestion {
                question,
                answer,
                category,
                difficulty,
            }),
            _ => Err(AppError::unprocessable("Invalid question: missing field")),
        }
    }
}
