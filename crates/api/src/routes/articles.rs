//! Route definitions for the `/articles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{articles, comments};
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// DELETE /{id}              -> delete
/// GET    /{id}/comments     -> get_thread
/// POST   /{id}/comments     -> add_thread
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(articles::list).post(articles::create))
        .route("/{id}", get(articles::get_by_id).delete(articles::delete))
        .route(
            "/{id}/comments",
            get(comments::get_thread).post(comments::add_thread),
        )
}
