//! Paginated question queries and mutations over the question store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use trivia_core::error::AppError;
use trivia_core::result::AppResult;
use trivia_core::types::{PageRequest, QuestionId};
use trivia_database::store::QuestionStore;
use trivia_entity::category::{CategoryMap, to_map};
use trivia_entity::question::{CreateQuestion, Question};

use crate::fault;

/// A page of questions together with the full category map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListing {
    /// Questions on the requested page.
    pub questions: Vec<Question>,
    /// Total number of stored questions.
    pub total_questions: usize,
    /// All categories, keyed by id.
    pub categories: CategoryMap,
}

/// A page of questions and the size of the set it was cut from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsPage {
    /// Questions on the requested page.
    pub questions: Vec<Question>,
    /// Number of questions across all pages.
    pub total_questions: usize,
}

/// Result of a deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedQuestion {
    /// Identifier of the removed question.
    pub deleted: QuestionId,
    /// Current page of remaining questions.
    pub questions: Vec<Question>,
    /// Number of remaining questions.
    pub total_questions: usize,
}

/// Result of a creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedQuestion {
    /// Identifier assigned to the new question.
    pub created: QuestionId,
    /// Current page of questions.
    pub questions: Vec<Question>,
    /// Number of questions after the insert.
    pub total_questions: usize,
}

/// Search body. The key must be present; its value may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Substring to look for in question text.
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Coordinates question queries and mutations.
#[derive(Debug, Clone)]
pub struct QuestionService {
    store: Arc<dyn QuestionStore>,
}

impl QuestionService {
    /// Creates a new question service.
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// List one page of questions with the category map.
    ///
    /// An empty page, or a store with no categories, is `NotFound`.
    pub async fn list_questions(&self, page: i64) -> AppResult<QuestionListing> {
        let page = fault::page_request(page)?;

        let questions = self
            .store
            .list_all()
            .await
            .map_err(fault::unprocessable("list questions"))?;
        let categories = self
            .store
            .get_categories()
            .await
            .map_err(fault::unprocessable("list categories"))?;

        let current = page.slice(&questions);
        debug!(page = page.page, shown = current.len(), total = questions.len(), "Listed questions");

        if current.is_empty() || categories.is_empty() {
            return Err(AppError::not_found(format!(
                "No questions on page {} ({} questions, {} categories)",
                page.page,
                questions.len(),
                categories.len()
            )));
        }

        Ok(QuestionListing {
            questions: current.to_vec(),
            total_questions: questions.len(),
            categories: to_map(&categories),
        })
    }

    /// Delete a question and return the current page of what remains.
    ///
    /// Every failure, including an unknown id, is `Unprocessable`.
    pub async fn delete_question(&self, id: QuestionId, page: i64) -> AppResult<DeletedQuestion> {
        let page = fault::page_request(page)?;

        self.store
            .delete_by_id(id)
            .await
            .map_err(fault::unprocessable("delete question"))?;

        let (questions, total_questions) = self.current_page(page, "list after delete").await?;
        info!(question_id = %id, remaining = total_questions, "Question removed");

        Ok(DeletedQuestion {
            deleted: id,
            questions,
            total_questions,
        })
    }

    /// Store a new question and return the current page of questions.
    ///
    /// Blank text, an unknown category, and store faults are all
    /// `Unprocessable`.
    pub async fn create_question(
        &self,
        data: &CreateQuestion,
        page: i64,
    ) -> AppResult<CreatedQuestion> {
        let page = fault::page_request(page)?;

        if let Some(field) = data.blank_field() {
            return Err(AppError::unprocessable(format!(
                "Field '{field}' must not be empty"
            )));
        }

        let created = self
            .store
            .insert(data)
            .await
            .map_err(fault::unprocessable("create question"))?;

        let (questions, total_questions) = self.current_page(page, "list after create").await?;
        info!(question_id = %created, total = total_questions, "Question added");

        Ok(CreatedQuestion {
            created,
            questions,
            total_questions,
        })
    }

    /// Case-insensitive substring search over question text, paginated.
    ///
    /// A missing `searchTerm` is `BadRequest`; store faults are
    /// `Unprocessable`. An empty page is returned as is.
    pub async fn search(&self, request: SearchRequest, page: i64) -> AppResult<QuestionsPage> {
        let page = fault::page_request(page)?;
        let term = request
            .search_term
            .ok_or_else(|| AppError::bad_request("searchTerm is required"))?;

        let found = self
            .store
            .search(&term)
            .await
            .map_err(fault::unprocessable("search questions"))?;

        debug!(term = %term, matches = found.len(), page = page.page, "Search complete");

        Ok(QuestionsPage {
            questions: page.slice(&found).to_vec(),
            total_questions: found.len(),
        })
    }

    async fn current_page(
        &self,
        page: PageRequest,
        operation: &'static str,
    ) -> AppResult<(Vec<Question>, usize)> {
        let all = self
            .store
            .list_all()
            .await
            .map_err(fault::unprocessable(operation))?;
        Ok((page.slice(&all).to_vec(), all.len()))
    }
}
