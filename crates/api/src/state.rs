use std::sync::Arc;

use quill_service::BlogService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The blog backend selected at startup (mock dataset or database).
    pub service: Arc<dyn BlogService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
