//! The question store contract and its implementations.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use trivia_core::result::AppResult;
use trivia_core::types::{CategoryId, QuestionId};
use trivia_entity::category::Category;
use trivia_entity::question::{CreateQuestion, Question};

pub use memory::MemoryQuestionStore;
pub use postgres::PgQuestionStore;

/// Durable collection of questions and categories.
///
/// The store owns persistence and identifier assignment. Failures are
/// typed: `NotFound` for a missing record, `Validation` for rejected
/// input, and `Database` for anything the backend could not complete.
/// Every list is ordered by identifier ascending.
#[async_trait]
pub trait QuestionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend name (e.g., "postgres", "memory").
    fn backend(&self) -> &str;

    /// Check whether the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// All questions.
    async fn list_all(&self) -> AppResult<Vec<Question>>;

    /// Questions belonging to `category_id`.
    async fn list_by_category(&self, category_id: CategoryId) -> AppResult<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case.
    ///
    /// An empty term matches nothing.
    async fn search(&self, term: &str) -> AppResult<Vec<Question>>;

    /// All categories.
    async fn get_categories(&self) -> AppResult<Vec<Category>>;

    /// A single category, or `NotFound`.
    async fn get_category(&self, category_id: CategoryId) -> AppResult<Category>;

    /// A single question, if present.
    async fn find_by_id(&self, id: QuestionId) -> AppResult<Option<Question>>;

    /// Store a new question and return its freshly assigned identifier.
    ///
    /// Fails with `Validation` when the question or answer is blank or the
    /// category does not exist.
    async fn insert(&self, question: &CreateQuestion) -> AppResult<QuestionId>;

    /// Remove a question. Fails with `NotFound` when no such question exists.
    async fn delete_by_id(&self, id: QuestionId) -> AppResult<()>;
}
