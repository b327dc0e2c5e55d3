//! Question listing, search, creation, and deletion.

pub mod service;

pub use service::{
    CreatedQuestion, DeletedQuestion, QuestionListing, QuestionService, QuestionsPage,
    SearchRequest,
};
