//! Normalization of store failures into boundary error kinds.

use tracing::warn;

use trivia_core::error::{AppError, ErrorKind};
use trivia_core::result::AppResult;
use trivia_core::types::PageRequest;

/// Re-tag any store failure as `Unprocessable`.
pub fn unprocessable(operation: &'static str) -> impl FnOnce(AppError) -> AppError {
    move |err| {
        warn!(operation, kind = %err.kind, error = %err.message, "Store operation failed");
        err.into_kind(ErrorKind::Unprocessable)
    }
}

/// Keep `NotFound` as is and re-tag every other failure as `Unprocessable`.
pub fn not_found_or_unprocessable(operation: &'static str) -> impl FnOnce(AppError) -> AppError {
    move |err| {
        if err.is(ErrorKind::NotFound) {
            err
        } else {
            unprocessable(operation)(err)
        }
    }
}

/// Validate a raw page number, reporting a bad one as `BadRequest`.
pub fn page_request(page: i64) -> AppResult<PageRequest> {
    PageRequest::new(page).map_err(|e| e.into_kind(ErrorKind::BadRequest))
}
