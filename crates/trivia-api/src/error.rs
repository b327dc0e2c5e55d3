//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use trivia_core::error::{AppError, ErrorKind};

/// Result type returned by handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// HTTP status code.
    pub error: u16,
    /// Fixed status message; the underlying cause is only logged.
    pub message: String,
}

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Status code and public message for an error kind.
    pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
        match kind {
            ErrorKind::BadRequest | ErrorKind::Validation => {
                (StatusCode::BAD_REQUEST, "Bad Request")
            }
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Resource Not Found"),
            ErrorKind::Unprocessable | ErrorKind::Database => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable")
            }
            ErrorKind::Configuration | ErrorKind::Serialization | ErrorKind::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::bad_request(format!(
            "Invalid JSON body: {}",
            rejection.body_text()
        )))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::bad_request(format!(
            "Invalid query string: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, message) = Self::status_for(err.kind);

        if status.is_server_error() {
            error!(kind = %err.kind, error = %err.message, source = ?err.source, "Request failed");
        } else {
            warn!(kind = %err.kind, error = %err.message, status = status.as_u16(), "Request rejected");
        }

        let body = ApiErrorResponse {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
