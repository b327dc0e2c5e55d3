//! Category queries over the question store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use trivia_core::error::AppError;
use trivia_core::result::AppResult;
use trivia_core::types::CategoryId;
use trivia_database::store::QuestionStore;
use trivia_entity::category::{CategoryMap, to_map};
use trivia_entity::question::Question;

use crate::fault;

/// Every category, keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListing {
    /// id -> label.
    pub categories: CategoryMap,
}

/// A page of questions from one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryQuestions {
    /// Questions on the requested page.
    pub questions: Vec<Question>,
    /// Number of questions in the category.
    pub total_questions: usize,
    /// Label of the category.
    pub current_category: String,
}

/// Serves category data.
#[derive(Debug, Clone)]
pub struct CategoryService {
    store: Arc<dyn QuestionStore>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// All categories. An empty set is `NotFound`.
    pub async fn get_categories(&self) -> AppResult<CategoryListing> {
        let categories = self
            .store
            .get_categories()
            .await
            .map_err(fault::unprocessable("list categories"))?;

        if categories.is_empty() {
            return Err(AppError::not_found("No categories defined"));
        }

        Ok(CategoryListing {
            categories: to_map(&categories),
        })
    }

    /// One page of the questions filed under `category_id`.
    ///
    /// An unknown category is `NotFound`; other store faults are
    /// `Unprocessable`.
    pub async fn questions_by_category(
        &self,
        category_id: CategoryId,
        page: i64,
    ) -> AppResult<CategoryQuestions> {
        let page = fault::page_request(page)?;

        let category = self
            .store
            .get_category(category_id)
            .await
            .map_err(fault::not_found_or_unprocessable("resolve category"))?;

        let questions = self
            .store
            .list_by_category(category_id)
            .await
            .map_err(fault::unprocessable("list category questions"))?;

        debug!(category = %category_id, total = questions.len(), page = page.page, "Listed category questions");

        Ok(CategoryQuestions {
            questions: page.slice(&questions).to_vec(),
            total_questions: questions.len(),
            current_category: category.kind,
        })
    }
}
