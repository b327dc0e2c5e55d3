//! Repository implementations for trivia entities.

pub mod category;
pub mod question;

pub use category::CategoryRepository;
pub use question::QuestionRepository;
