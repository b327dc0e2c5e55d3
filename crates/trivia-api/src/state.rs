//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use trivia_core::config::AppConfig;
use trivia_database::store::QuestionStore;
use trivia_service::random::RandomSource;
use trivia_service::{CategoryService, QuestionService, QuizSelector, QuizService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Question store (PostgreSQL or in-memory)
    pub store: Arc<dyn QuestionStore>,

    // ── Services ─────────────────────────────────────────────
    /// Question listing, search, create, delete
    pub question_service: Arc<QuestionService>,
    /// Category listing and filtering
    pub category_service: Arc<CategoryService>,
    /// Quiz question selection
    pub quiz_service: Arc<QuizService>,
}

impl AppState {
    /// Wire every service around one store and one random source.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn QuestionStore>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let selector = QuizSelector::new(Arc::clone(&store), random);

        Self {
            config: Arc::new(config),
            question_service: Arc::new(QuestionService::new(Arc::clone(&store))),
            category_service: Arc::new(CategoryService::new(Arc::clone(&store))),
            quiz_service: Arc::new(QuizService::new(selector)),
            store,
        }
    }
}
