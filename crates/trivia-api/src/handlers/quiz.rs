//! Quiz handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use trivia_service::quiz::{QuizQuestion, QuizRequest};

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /quizzes
pub async fn next_question(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<QuizQuestion>>> {
    let Json(req) = body?;
    let result = state.quiz_service.next_question(req).await?;
    Ok(Json(ApiResponse::ok(result)))
}
