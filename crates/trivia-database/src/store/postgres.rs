//! PostgreSQL-backed question store.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use trivia_core::error::AppError;
use trivia_core::result::AppResult;
use trivia_core::types::{CategoryId, QuestionId};
use trivia_entity::category::Category;
use trivia_entity::question::{CreateQuestion, Question};

use super::QuestionStore;
use crate::connection;
use crate::repositories::{CategoryRepository, QuestionRepository};

/// Question store over the `questions` and `categories` tables.
///
/// Identifiers come from `BIGSERIAL` sequences, so concurrent inserts never
/// collide and deleted identifiers are never handed out again.
#[derive(Debug, Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
    questions: QuestionRepository,
    categories: CategoryRepository,
}

impl PgQuestionStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            questions: QuestionRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    fn backend(&self) -> &str {
        "postgres"
    }

    async fn health_check(&self) -> AppResult<bool> {
        connection::ping(&self.pool).await
    }

    async fn list_all(&self) -> AppResult<Vec<Question>> {
        self.questions.find_all().await
    }

    async fn list_by_category(&self, category_id: CategoryId) -> AppResult<Vec<Question>> {
        self.questions.find_by_category(category_id).await
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        let found = self.questions.search(term).await?;
        debug!(term = %term, matches = found.len(), "Searched questions");
        Ok(found)
    }

    async fn get_categories(&self) -> AppResult<Vec<Category>> {
        self.categories.find_all().await
    }

    async fn get_category(&self, category_id: CategoryId) -> AppResult<Category> {
        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {category_id} not found")))
    }

    async fn find_by_id(&self, id: QuestionId) -> AppResult<Option<Question>> {
        self.questions.find_by_id(id).await
    }

    async fn insert(&self, question: &CreateQuestion) -> AppResult<QuestionId> {
        if let Some(field) = question.blank_field() {
            return Err(AppError::validation(format!("Field '{field}' must not be empty")));
        }

        let created = self.questions.create(question).await?;
        info!(question_id = %created.id, category = %created.category, "Question created");
        Ok(created.id)
    }

    async fn delete_by_id(&self, id: QuestionId) -> AppResult<()> {
        if !self.questions.delete(id).await? {
            return Err(AppError::not_found(format!("Question {id} not found")));
        }
        info!(question_id = %id, "Question deleted");
        Ok(())
    }
}
