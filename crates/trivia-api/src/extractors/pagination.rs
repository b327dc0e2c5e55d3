//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

/// Query parameters for paginated endpoints.
///
/// A non-numeric `page` fails query extraction and answers 400 Bad Request
/// instead of falling back to the first page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1). Values below 1 are rejected
    /// downstream rather than clamped.
    pub page: Option<i64>,
}

impl PaginationParams {
    /// Requested page, defaulting to the first.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}
