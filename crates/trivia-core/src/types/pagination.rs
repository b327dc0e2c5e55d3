//! Page-number pagination over ordered result sets.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Number of questions per page.
pub const QUESTIONS_PER_PAGE: u64 = 10;

/// A validated page request (1-based page number, non-zero page size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a page request with the fixed question page size.
    ///
    /// Page numbers below 1 are rejected, not clamped.
    pub fn new(page: i64) -> AppResult<Self> {
        Self::with_size(page, QUESTIONS_PER_PAGE)
    }

    /// Create a page request with an explicit page size.
    pub fn with_size(page: i64, page_size: u64) -> AppResult<Self> {
        if page < 1 {
            return Err(AppError::validation(format!(
                "Page number must be 1 or greater, got {page}"
            )));
        }
        if page_size == 0 {
            return Err(AppError::validation("Page size must be greater than 0"));
        }
        Ok(Self {
            page: page as u64,
            page_size,
        })
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Maximum number of items on this page.
    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Borrow the items that fall on this page.
    ///
    /// Returns an empty slice when the page starts at or past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        if start >= items.len() {
            return &[];
        }
        let len = usize::try_from(self.limit()).unwrap_or(usize::MAX);
        let end = start.saturating_add(len).min(items.len());
        &items[start..end]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: QUESTIONS_PER_PAGE,
        }
    }
}

/// Slice `items` into the page addressed by `page_number`.
///
/// Pure: the same inputs always give the same slice and `items` is never
/// modified. An empty slice means the page lies past the end of the data.
pub fn paginate<T>(items: &[T], page_number: i64, page_size: u64) -> AppResult<&[T]> {
    Ok(PageRequest::with_size(page_number, page_size)?.slice(items))
}
