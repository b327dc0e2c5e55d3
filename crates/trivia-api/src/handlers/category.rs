//! Category listing and per-category question handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};

use trivia_core::types::CategoryId;
use trivia_service::category::{CategoryListing, CategoryQuestions};

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{PaginationParams, parse_id};
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<CategoryListing>>> {
    let listing = state.category_service.get_categories().await?;
    Ok(Json(ApiResponse::ok(listing)))
}

/// GET /categories/{id}/questions?page=N
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<CategoryQuestions>>> {
    let Query(params) = query?;
    let category_id: CategoryId = parse_id(&id)?;

    let result = state
        .category_service
        .questions_by_category(category_id, params.page())
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}
