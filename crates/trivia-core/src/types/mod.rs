//! Core type definitions used across the trivia workspace.

pub mod id;
pub mod pagination;

pub use id::{CategoryId, QuestionId};
pub use pagination::{PageRequest, QUESTIONS_PER_PAGE, paginate};
