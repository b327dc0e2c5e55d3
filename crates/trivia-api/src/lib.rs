//! # trivia-api
//!
//! HTTP API layer for the trivia service built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, request logging),
//! extractors, DTOs, and the mapping from `AppError` kinds to status codes.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_store, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
