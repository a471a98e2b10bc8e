//! Idempotent schema initialisation and inspection.

use sqlx::{FromRow, SqliteConnection};

/// DDL applied by [`init_schema`], in order. Every statement is guarded with
/// `IF NOT EXISTS` so re-running it is a no-op.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS articles (
        id               INTEGER PRIMARY KEY AUTOINCREMENT,
        title            TEXT    NOT NULL,
        date_created     TEXT    NOT NULL,
        author           TEXT    NOT NULL,
        topics           TEXT    NOT NULL DEFAULT '[]',
        article_img_link TEXT    NOT NULL,
        content_blocks   TEXT    NOT NULL DEFAULT '[]'
    )",
    "CREATE TABLE IF NOT EXISTS comments (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        article_id  INTEGER NOT NULL REFERENCES articles(id),
        parent_id   INTEGER REFERENCES comments(id),
        author_name TEXT    NOT NULL,
        text        TEXT    NOT NULL,
        avatar_url  TEXT    NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_comments_article_id ON comments (article_id)",
];

/// Create the `articles` and `comments` tables if they are absent.
///
/// Safe to call on every startup.
pub async fn init_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    tracing::debug!(statements = SCHEMA.len(), "Schema initialised");
    Ok(())
}

/// One table or index definition as recorded by SQLite.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct SchemaObject {
    /// `table` or `index`.
    pub kind: String,
    pub name: String,
    pub table_name: String,
    pub sql: Option<String>,
}

/// List the user-defined tables and indexes, ordered by kind then name.
pub async fn describe_schema(
    conn: &mut SqliteConnection,
) -> Result<Vec<SchemaObject>, sqlx::Error> {
    sqlx::query_as::<_, SchemaObject>(
        "SELECT type AS kind, name, tbl_name AS table_name, sql
         FROM sqlite_master
         WHERE type IN ('table', 'index') AND name NOT LIKE 'sqlite_%'
         ORDER BY type, name",
    )
    .fetch_all(&mut *conn)
    .await
}
