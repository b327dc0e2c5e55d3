//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::CreateQuestionRequest;
pub use response::{ApiResponse, HealthResponse};
