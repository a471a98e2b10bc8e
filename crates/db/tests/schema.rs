//! Schema bootstrap tests: idempotent initialisation and expected objects.

use quill_db::{create_pool, describe_schema, init_schema};

#[tokio::test]
async fn test_init_schema_is_idempotent() {
    let pool = create_pool("sqlite::memory:", 1).await.unwrap();
    let mut conn = pool.acquire().await.unwrap();

    init_schema(&mut conn).await.unwrap();
    let first = describe_schema(&mut conn).await.unwrap();

    init_schema(&mut conn).await.unwrap();
    let second = describe_schema(&mut conn).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_schema_contains_tables_and_index() {
    let pool = quill_db::create_in_memory_pool().await.unwrap();
    let mut conn = pool.acquire().await.unwrap();

    let names: Vec<(String, String)> = describe_schema(&mut conn)
        .await
        .unwrap()
        .into_iter()
        .map(|o| (o.kind, o.name))
        .collect();

    assert!(names.contains(&("table".to_string(), "articles".to_string())));
    assert!(names.contains(&("table".to_string(), "comments".to_string())));
    assert!(names.contains(&("index".to_string(), "idx_comments_article_id".to_string())));
}

#[tokio::test]
async fn test_comment_foreign_keys_are_declared() {
    let pool = quill_db::create_in_memory_pool().await.unwrap();
    let mut conn = pool.acquire().await.unwrap();

    let targets: Vec<(String, String)> = sqlx::query_as(
        "SELECT \"table\", \"from\" FROM pragma_foreign_key_list('comments') ORDER BY \"from\"",
    )
    .fetch_all(&mut *conn)
    .await
    .unwrap();

    assert_eq!(
        targets,
        vec![
            ("articles".to_string(), "article_id".to_string()),
            ("comments".to_string(), "parent_id".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_health_check_passes() {
    let pool = quill_db::create_in_memory_pool().await.unwrap();
    quill_db::health_check(&pool).await.unwrap();
}

#[tokio::test]
async fn test_in_memory_database_survives_between_acquisitions() {
    let pool = quill_db::create_in_memory_pool().await.unwrap();

    {
        let mut conn = pool.acquire().await.unwrap();
        sqlx::query(
            "INSERT INTO articles (title, date_created, author, article_img_link)
             VALUES ('t', 'd', 'a', 'i')",
        )
        .execute(&mut *conn)
        .await
        .unwrap();
    }

    let mut conn = pool.acquire().await.unwrap();
    assert_eq!(quill_db::repositories::ArticleRepo::count(&mut conn).await.unwrap(), 1);
}
