pub mod articles;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /articles                         list (?page, per_page), create
/// /articles/{id}                    get, delete
/// /articles/{id}/comments           get thread, add thread
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/articles", articles::router())
}
