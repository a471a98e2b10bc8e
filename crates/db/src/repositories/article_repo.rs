//! Repository for the `articles` table.

use quill_core::article::{Article, ArticleSummary, NewArticle};
use quill_core::types::DbId;
use sqlx::types::Json;
use sqlx::{Connection, SqliteConnection};

use crate::models::article::{ArticleRecord, ArticleSummaryRecord};

/// Column list shared across full-article queries.
const COLUMNS: &str = "id, title, date_created, author, topics, article_img_link, content_blocks";

/// Column list for summary queries (no content blocks).
const SUMMARY_COLUMNS: &str = "id, title, date_created, author, topics, article_img_link";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert an article, returning the id it was stored under.
    ///
    /// A `None` id lets storage assign the next one. Inserting an id that
    /// already exists fails with a unique-constraint database error.
    pub async fn insert(
        conn: &mut SqliteConnection,
        input: &NewArticle,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO articles
                (id, title, date_created, author, topics, article_img_link, content_blocks)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(input.id)
        .bind(&input.title)
        .bind(&input.date_created)
        .bind(&input.author)
        .bind(Json(&input.topics))
        .bind(&input.article_img_link)
        .bind(Json(&input.content_blocks))
        .fetch_one(&mut *conn)
        .await
    }

    /// Find an article by id.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = ?");
        let record = sqlx::query_as::<_, ArticleRecord>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(record.map(Article::from))
    }

    /// Whether an article with this id exists.
    pub async fn exists(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let found = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles WHERE id = ?")
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(found > 0)
    }

    /// One page of summaries in ascending id order.
    ///
    /// `limit` and `offset` are expected to be validated by the caller.
    pub async fn list_summaries(
        conn: &mut SqliteConnection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ArticleSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM articles
             ORDER BY id ASC
             LIMIT ? OFFSET ?"
        );
        let records = sqlx::query_as::<_, ArticleSummaryRecord>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await?;
        Ok(records.into_iter().map(ArticleSummary::from).collect())
    }

    /// Total number of articles.
    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(&mut *conn)
            .await
    }

    /// Delete an article together with its comments. Returns `true` if the
    /// article row existed.
    ///
    /// Comments in other articles that reply to one of the deleted comments
    /// lose their parent link and surface as roots of their own thread.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = conn.begin().await?;

        let detached = sqlx::query(
            "UPDATE comments SET parent_id = NULL
             WHERE article_id <> ?1
               AND parent_id IN (SELECT id FROM comments WHERE article_id = ?1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let comments = sqlx::query("DELETE FROM comments WHERE article_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let articles = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::debug!(article_id = id, comments, detached, "Article deleted");
        Ok(articles > 0)
    }
}
