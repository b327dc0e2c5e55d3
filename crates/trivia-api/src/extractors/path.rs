//! Typed path parameter helpers.

use std::str::FromStr;

use trivia_core::error::AppError;

/// Parses an identifier from a path segment.
///
/// A segment that is not an integer names no resource, so it is `NotFound`.
pub fn parse_id<T: FromStr>(s: &str) -> Result<T, AppError> {
    s.parse::<T>()
        .map_err(|_| AppError::not_found(format!("Invalid identifier: {s}")))
}
