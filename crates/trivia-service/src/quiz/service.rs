//! Quiz use case: serve the next unseen question.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use trivia_core::error::AppError;
use trivia_core::result::AppResult;
use trivia_core::types::id::deserialize_lenient;
use trivia_core::types::{CategoryId, QuestionId};
use trivia_entity::question::Question;

use super::selector::QuizSelector;
use crate::fault;

/// Category chosen for a quiz. An id of 0 stands for "all categories".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategory {
    /// Category identifier, or 0 for all.
    #[serde(deserialize_with = "deserialize_lenient")]
    pub id: CategoryId,
    /// Display label sent along by clients; ignored.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl QuizCategory {
    /// Category restriction, `None` meaning every category.
    pub fn scope(&self) -> Option<CategoryId> {
        (self.id.get() != 0).then_some(self.id)
    }
}

/// Body of a quiz request. Both keys are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Questions already served in this session.
    #[serde(default)]
    pub previous_questions: Option<Vec<QuestionId>>,
    /// The chosen category.
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Result of a quiz request; `question` is `None` once the pool is exhausted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// The next question, if any remain.
    pub question: Option<Question>,
}

/// Serves quiz questions.
#[derive(Debug, Clone)]
pub struct QuizService {
    selector: QuizSelector,
}

impl QuizService {
    /// Creates a new quiz service.
    pub fn new(selector: QuizSelector) -> Self {
        Self { selector }
    }

    /// Pick the next question for a session.
    ///
    /// Missing `previous_questions` or `quiz_category` is a `BadRequest`;
    /// exhaustion is a success with no question.
    pub async fn next_question(&self, request: QuizRequest) -> AppResult<QuizQuestion> {
        let previous = request
            .previous_questions
            .ok_or_else(|| AppError::bad_request("previous_questions is required"))?;
        let category = request
            .quiz_category
            .ok_or_else(|| AppError::bad_request("quiz_category is required"))?;

        let excluded: HashSet<QuestionId> = previous.into_iter().collect();
        let scope = category.scope();

        let question = self
            .selector
            .next(scope, &excluded)
            .await
            .map_err(fault::unprocessable("select quiz question"))?
            .into_question();

        match &question {
            Some(q) => info!(question_id = %q.id, category = ?scope, served = excluded.len(), "Quiz question served"),
            None => info!(category = ?scope, served = excluded.len(), "Quiz exhausted"),
        }

        Ok(QuizQuestion { question })
    }
}
