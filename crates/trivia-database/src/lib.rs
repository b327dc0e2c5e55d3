//! # trivia-database
//!
//! PostgreSQL connection management, repositories, and the
//! [`QuestionStore`] implementations the service layer consumes.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{MemoryQuestionStore, PgQuestionStore, QuestionStore};
