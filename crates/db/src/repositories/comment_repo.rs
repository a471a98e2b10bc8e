//! Repository for the `comments` table.

use quill_core::thread::{insertion_order, reconstruct, CommentRow, CommentThread};
use quill_core::types::DbId;
use sqlx::{Connection, SqliteConnection};

use crate::models::comment::CommentRecord;

/// Provides thread-level reads and writes for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Flat comment rows of one article in ascending id (insertion) order.
    pub async fn list_rows(
        conn: &mut SqliteConnection,
        article_id: DbId,
    ) -> Result<Vec<CommentRow>, sqlx::Error> {
        let records = sqlx::query_as::<_, CommentRecord>(
            "SELECT id, parent_id, author_name, text, avatar_url
             FROM comments
             WHERE article_id = ?
             ORDER BY id ASC",
        )
        .bind(article_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(records.into_iter().map(CommentRow::from).collect())
    }

    /// The nested comment thread of one article. Empty if it has none.
    pub async fn get_thread(
        conn: &mut SqliteConnection,
        article_id: DbId,
    ) -> Result<CommentThread, sqlx::Error> {
        let rows = Self::list_rows(conn, article_id).await?;
        Ok(reconstruct(rows))
    }

    /// Insert every comment of `thread` under `article_id`, returning the
    /// number of rows written.
    ///
    /// Parents are written before their replies so each reply can reference
    /// the id just assigned to its parent. The whole thread is written in one
    /// transaction.
    pub async fn insert_tree(
        conn: &mut SqliteConnection,
        article_id: DbId,
        thread: &CommentThread,
    ) -> Result<usize, sqlx::Error> {
        let order = insertion_order(thread);
        let mut assigned: Vec<DbId> = Vec::with_capacity(order.len());

        let mut tx = conn.begin().await?;
        for &(parent_pos, comment) in &order {
            let parent_id = parent_pos.map(|pos| assigned[pos]);
            let id = sqlx::query_scalar::<_, DbId>(
                "INSERT INTO comments (article_id, parent_id, author_name, text, avatar_url)
                 VALUES (?, ?, ?, ?, ?)
                 RETURNING id",
            )
            .bind(article_id)
            .bind(parent_id)
            .bind(&comment.author_name)
            .bind(&comment.text)
            .bind(&comment.avatar_url)
            .fetch_one(&mut *tx)
            .await?;
            assigned.push(id);
        }
        tx.commit().await?;

        tracing::debug!(article_id, inserted = assigned.len(), "Comment thread inserted");
        Ok(assigned.len())
    }

    /// Number of comments (at any depth) attached to an article.
    pub async fn count_for_article(
        conn: &mut SqliteConnection,
        article_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE article_id = ?")
            .bind(article_id)
            .fetch_one(&mut *conn)
            .await
    }
}
