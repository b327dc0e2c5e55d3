//! In-memory question store using a Tokio `RwLock` for single-node use.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use trivia_core::error::AppError;
use trivia_core::result::AppResult;
use trivia_core::types::{CategoryId, QuestionId};
use trivia_entity::category::{Category, DEFAULT_CATEGORIES};
use trivia_entity::question::{CreateQuestion, Question};

use super::QuestionStore;

/// Internal state for the memory-based store.
#[derive(Debug)]
struct InnerState {
    /// Questions keyed by identifier; iteration order is identifier order.
    questions: BTreeMap<QuestionId, Question>,
    /// Categories keyed by identifier.
    categories: BTreeMap<CategoryId, Category>,
    /// Next identifier to assign. Only ever increases.
    next_id: i64,
}

/// In-memory question store.
///
/// Identifier assignment happens under the write lock, so concurrent
/// inserts never receive the same identifier. Contents are lost on exit.
#[derive(Debug, Clone)]
pub struct MemoryQuestionStore {
    state: Arc<RwLock<InnerState>>,
}

impl MemoryQuestionStore {
    /// Creates a store with the given categories and no questions.
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InnerState {
                questions: BTreeMap::new(),
                categories: categories.into_iter().map(|c| (c.id, c)).collect(),
                next_id: 1,
            })),
        }
    }

    /// Creates a store seeded with the six default categories (ids 1 to 6).
    pub fn with_default_categories() -> Self {
        Self::new(
            DEFAULT_CATEGORIES
                .iter()
                .zip(1i64..)
                .map(|(label, id)| Category::new(id, *label))
                .collect(),
        )
    }
}

impl Default for MemoryQuestionStore {
    fn default() -> Self {
        Self::with_default_categories()
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn list_all(&self) -> AppResult<Vec<Question>> {
        let state = self.state.read().await;
        Ok(state.questions.values().cloned().collect())
    }

    async fn list_by_category(&self, category_id: CategoryId) -> AppResult<Vec<Question>> {
        let state = self.state.read().await;
        Ok(state
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        let state = self.state.read().await;
        let found: Vec<Question> = state
            .questions
            .values()
            .filter(|q| q.matches(term))
            .cloned()
            .collect();
        debug!(term = %term, matches = found.len(), "Searched questions");
        Ok(found)
    }

    async fn get_categories(&self) -> AppResult<Vec<Category>> {
        let state = self.state.read().await;
        Ok(state.categories.values().cloned().collect())
    }

    async fn get_category(&self, category_id: CategoryId) -> AppResult<Category> {
        let state = self.state.read().await;
        state
            .categories
            .get(&category_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Category {category_id} not found")))
    }

    async fn find_by_id(&self, id: QuestionId) -> AppResult<Option<Question>> {
        let state = self.state.read().await;
        Ok(state.questions.get(&id).cloned())
    }

    async fn insert(&self, question: &CreateQuestion) -> AppResult<QuestionId> {
        if let Some(field) = question.blank_field() {
            return Err(AppError::validation(format!("Field '{field}' must not be empty")));
        }

        let mut state = self.state.write().await;

        if !state.categories.contains_key(&question.category) {
            return Err(AppError::validation(format!(
                "Category {} does not exist",
                question.category
            )));
        }

        let id = QuestionId(state.next_id);
        state.next_id += 1;
        state.questions.insert(
            id,
            Question {
                id,
                question: question.question.clone(),
                answer: question.answer.clone(),
                category: question.category,
                difficulty: question.difficulty,
            },
        );

        info!(question_id = %id, category = %question.category, "Question created");
        Ok(id)
    }

    async fn delete_by_id(&self, id: QuestionId) -> AppResult<()> {
        let mut state = self.state.write().await;

        if state.questions.remove(&id).is_none() {
            return Err(AppError::not_found(format!("Question {id} not found")));
        }

        info!(question_id = %id, remaining = state.questions.len(), "Question deleted");
        Ok(())
    }
}
