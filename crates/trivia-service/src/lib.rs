//! # trivia-service
//!
//! Use-case layer for the trivia service. Each service composes the
//! question store with pagination or quiz selection and normalizes store
//! failures into the boundary error kinds.
//!
//! Services follow constructor injection: the store and the random source
//! are provided at construction time as `Arc` trait objects.

pub mod category;
pub mod fault;
pub mod question;
pub mod quiz;
pub mod random;

pub use category::CategoryService;
pub use question::QuestionService;
pub use quiz::{QuizSelector, QuizService};
pub use random::{RandomSource, SeededRandom, ThreadRandom};

#[cfg(test)]
pub(crate) mod testing;
