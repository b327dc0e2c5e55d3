//! Route definitions for the trivia HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::Router;
use axum::routing::{delete, get, post};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with every route, bound to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(category_routes())
        .merge(question_routes())
        .merge(quiz_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Category listing and filtering
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list_categories))
        .route(
            "/categories/{id}/questions",
            get(handlers::category::questions_by_category),
        )
}

/// Question CRUD and search
fn question_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(handlers::question::list_questions).post(handlers::question::create_question),
        )
        .route("/questions/{id}", delete(handlers::question::delete_question))
        .route("/questions/search", post(handlers::question::search_questions))
}

/// Quiz play
fn quiz_routes() -> Router<AppState> {
    Router::new().route("/quizzes", post(handlers::quiz::next_question))
}

/// Health
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
