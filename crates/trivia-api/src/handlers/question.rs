//! Question listing, search, creation, and deletion handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use trivia_core::types::QuestionId;
use trivia_service::question::{
    CreatedQuestion, DeletedQuestion, QuestionListing, QuestionsPage, SearchRequest,
};

use crate::dto::request::CreateQuestionRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{PaginationParams, parse_id};
use crate::state::AppState;

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<QuestionListing>>> {
    let Query(params) = query?;
    let listing = state.question_service.list_questions(params.page()).await?;
    Ok(Json(ApiResponse::ok(listing)))
}

/// DELETE /questions/{id}?page=N
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<DeletedQuestion>>> {
    let Query(params) = query?;
    let question_id: QuestionId = parse_id(&id)?;

    let result = state
        .question_service
        .delete_question(question_id, params.page())
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST /questions?page=N
pub async fn create_question(
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<CreatedQuestion>>> {
    let Query(params) = query?;
    let Json(req) = body?;
    let data = req.into_create()?;

    let result = state
        .question_service
        .create_question(&data, params.page())
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST /questions/search?page=N
pub async fn search_questions(
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<QuestionsPage>>> {
    let Query(params) = query?;
    let Json(req) = body?;

    let result = state.question_service.search(req, params.page()).await?;
    Ok(Json(ApiResponse::ok(result)))
}
