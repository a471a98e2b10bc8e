//! Integration tests for the repository-backed service facade.

use assert_matches::assert_matches;
use quill_core::article::{ContentBlock, NewArticle};
use quill_core::error::CoreError;
use quill_core::thread::{Comment, CommentThread};
use quill_service::{BlogService, DatabaseService, ServiceError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn service() -> DatabaseService {
    let pool = quill_db::create_pool("sqlite::memory:", 1).await.unwrap();
    DatabaseService::from_pool(pool).await.unwrap()
}

fn new_article(id: Option<i64>) -> NewArticle {
    NewArticle {
        id,
        title: "A".to_string(),
        date_created: "2026-01-01".to_string(),
        author: "TestBot".to_string(),
        topics: vec!["x".to_string()],
        article_img_link: "https://example.com/a.jpg".to_string(),
        content_blocks: vec![ContentBlock {
            text: "h".to_string(),
            is_header: true,
        }],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_get_delete_scenario() {
    let service = service().await;

    let id = service.create_article(new_article(Some(1))).await.unwrap();
    assert_eq!(id, 1);

    let article = service.get_article(1).await.unwrap().unwrap();
    assert_eq!(article, new_article(Some(1)).into_article(1));

    assert!(service.delete_article(1).await.unwrap());
    assert!(service.get_article(1).await.unwrap().is_none());
    assert!(!service.delete_article(1).await.unwrap());
}

#[tokio::test]
async fn test_duplicate_create_is_duplicate_key() {
    let service = service().await;

    service.create_article(new_article(Some(9999))).await.unwrap();
    let err = service.create_article(new_article(Some(9999))).await.unwrap_err();

    assert_matches!(err, ServiceError::DuplicateKey { entity: "Article", id: 9999 });
}

#[tokio::test]
async fn test_comment_thread_round_trip() {
    let service = service().await;
    service.create_article(new_article(Some(1))).await.unwrap();

    let thread = CommentThread {
        comments: vec![Comment::new("User1", "First!", "img1.jpg")
            .with_replies(vec![Comment::new("User2", "Second!", "img2.jpg")])],
    };
    let inserted = service.add_comment_thread(1, &thread).await.unwrap();

    assert_eq!(inserted, 2);
    assert_eq!(service.get_comment_thread(1).await.unwrap(), thread);
}

#[tokio::test]
async fn test_comment_thread_for_missing_article_is_not_found() {
    let service = service().await;

    let thread = CommentThread {
        comments: vec![Comment::new("User1", "First!", "img1.jpg")],
    };
    let err = service.add_comment_thread(77, &thread).await.unwrap_err();

    assert_matches!(err, ServiceError::Core(CoreError::NotFound { id: 77, .. }));
}

#[tokio::test]
async fn test_summaries_and_count() {
    let service = service().await;
    for _ in 0..8 {
        service.create_article(new_article(None)).await.unwrap();
    }

    assert_eq!(service.get_total_count().await.unwrap(), 8);
    assert_eq!(service.get_summaries(6, 0).await.unwrap().len(), 6);
    assert_eq!(service.get_summaries(6, 6).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_closed_pool_is_connection_failure() {
    let service = service().await;
    service.pool().close().await;

    let err = service.get_total_count().await.unwrap_err();
    assert_matches!(err, ServiceError::ConnectionFailure(_));
    assert!(service.health_check().await.is_err());
}
