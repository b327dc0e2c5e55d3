//! Question entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use trivia_core::types::{CategoryId, QuestionId};

/// A trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    /// Unique question identifier.
    pub id: QuestionId,
    /// The question text.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// The category the question belongs to.
    pub category: CategoryId,
    /// Difficulty rating, 1 (easy) to 5 (hard) by convention.
    pub difficulty: i32,
}

impl Question {
    /// Case-insensitive substring match on the question text.
    ///
    /// An empty term matches nothing.
    pub fn matches(&self, term: &str) -> bool {
        !term.is_empty() && self.question.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Data required to create a new question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestion {
    /// The question text.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// Owning category.
    pub category: CategoryId,
    /// Difficulty rating.
    pub difficulty: i32,
}

impl CreateQuestion {
    /// Name of the first required text field that is blank, if any.
    pub fn blank_field(&self) -> Option<&'static str> {
        if self.question.trim().is_empty() {
            Some("question")
        } else if self.answer.trim().is_empty() {
            Some("answer")
        } else {
            None
        }
    }
}
