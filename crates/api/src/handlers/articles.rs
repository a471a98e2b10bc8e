//! Handlers for the `/articles` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use quill_core::article::{validate_new_article, Article, ArticleSummary, NewArticle};
use quill_core::error::CoreError;
use quill_core::pagination::{clamp_page, clamp_per_page, page_offset, PageInfo};
use quill_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// One page of article summaries plus navigation metadata.
#[derive(Debug, Serialize)]
pub struct ArticlePage {
    pub data: Vec<ArticleSummary>,
    pub page: PageInfo,
}

/// GET /api/v1/articles?page=&per_page=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ArticlePage>> {
    let page = clamp_page(params.page);
    let per_page = clamp_per_page(params.per_page);

    let summaries = state
        .service
        .get_summaries(per_page, page_offset(page, per_page))
        .await?;
    let total_count = state.service.get_total_count().await?;

    Ok(Json(ArticlePage {
        data: summaries,
        page: PageInfo::new(page, per_page, total_count),
    }))
}

/// GET /api/v1/articles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Article>>> {
    let article = ensure_article(&state, id).await?;
    Ok(Json(DataResponse { data: article }))
}

/// POST /api/v1/articles
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewArticle>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<MessageResponse>>)> {
    let Json(input) = payload?;
    validate_new_article(&input)?;

    let id = state.service.create_article(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: MessageResponse {
                id,
                message: "Article created successfully".to_string(),
            },
        }),
    ))
}

/// DELETE /api/v1/articles/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_article(&state, id).await?;

    if !state.service.delete_article(id).await? {
        return Err(not_found(id));
    }

    Ok(Json(DataResponse {
        data: MessageResponse {
            id,
            message: format!("Article {id} deleted successfully"),
        },
    }))
}

/// Fetch an article or fail with 404.
pub async fn ensure_article(state: &AppState, id: DbId) -> AppResult<Article> {
    state.service.get_article(id).await?.ok_or_else(|| not_found(id))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Article",
        id,
    })
}
