#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use quill_api::config::ServerConfig;
use quill_api::router::build_app_router;
use quill_api::state::AppState;
use quill_service::{BlogService, DataSource, DatabaseService, MockService};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_source: DataSource::Mock,
    }
}

/// Build the full application router around `service`, using the same
/// middleware stack as `main.rs`.
pub fn build_test_app(service: Arc<dyn BlogService>) -> Router {
    let config = test_config();
    let state = AppState {
        service,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// App served from the built-in mock dataset.
pub fn mock_app() -> Router {
    build_test_app(Arc::new(MockService::new()))
}

/// App served from a fresh private in-memory database.
///
/// The returned router can be cloned freely; every clone shares the database.
pub async fn database_app() -> Router {
    database_app_with_pool().await.0
}

/// Like [`database_app`], but also hands back the pool so a test can seed
/// rows the HTTP API would never write.
pub async fn database_app_with_pool() -> (Router, quill_db::DbPool) {
    let pool = quill_db::create_pool("sqlite::memory:", 1).await.unwrap();
    let service = DatabaseService::from_pool(pool.clone()).await.unwrap();
    (build_test_app(Arc::new(service)), pool)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let body = Body::from(serde_json::to_vec(&json).unwrap());
    send(app, Method::POST, uri, body, Some("application/json")).await
}

/// POST a raw body, for malformed-payload tests.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body), Some("application/json")).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A minimal valid article payload.
pub fn article_json(id: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "date_created": "March 3, 2026",
        "author": "Ada",
        "topics": ["Rust", "SQLite"],
        "article_img_link": "https://example.test/cover.jpg",
        "content_blocks": [
            {"text": "Intro", "is_header": true},
            {"text": "Body text.", "is_header": false}
        ]
    })
}
