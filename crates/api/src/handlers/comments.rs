//! Handlers for `/articles/{id}/comments`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use quill_core::thread::{validate_thread, CommentThread};
use quill_core::types::DbId;

use crate::error::AppResult;
use crate::handlers::articles::ensure_article;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of storing a comment thread.
#[derive(Debug, Serialize)]
pub struct InsertedComments {
    pub article_id: DbId,
    pub inserted: usize,
}

/// GET /api/v1/articles/{id}/comments
pub async fn get_thread(
    State(state): State<AppState>,
    Path(article_id): Path<DbId>,
) -> AppResult<Json<DataResponse<CommentThread>>> {
    ensure_article(&state, article_id).await?;
    let thread = state.service.get_comment_thread(article_id).await?;
    Ok(Json(DataResponse { data: thread }))
}

/// POST /api/v1/articles/{id}/comments
///
/// Body is a whole thread: `{ "comments": [ { ..., "replies": [...] } ] }`.
pub async fn add_thread(
    State(state): State<AppState>,
    Path(article_id): Path<DbId>,
    payload: Result<Json<CommentThread>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<InsertedComments>>)> {
    let Json(thread) = payload?;
    validate_thread(&thread)?;
    ensure_article(&state, article_id).await?;

    let inserted = state.service.add_comment_thread(article_id, &thread).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: InsertedComments {
                article_id,
                inserted,
            },
        }),
    ))
}
