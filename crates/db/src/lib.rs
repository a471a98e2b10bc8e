//! Storage gateway and repositories for the Quill blog backend.
//!
//! Storage is an embedded SQLite database accessed through a `sqlx` pool.
//! Repositories operate on a single borrowed connection so callers decide
//! the unit of work; a pooled connection is returned to the pool when its
//! guard drops, on every exit path.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod schema;

pub use schema::{describe_schema, init_schema, SchemaObject};

pub type DbPool = sqlx::SqlitePool;

/// Open a connection pool for `database_url`, creating the database file if
/// it does not exist. Foreign keys are enforced on every connection.
///
/// In-memory databases live only as long as a connection to them, so those
/// pools pin exactly one connection that never idles out.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    pool_options.connect_with(options).await
}

/// Open a fresh private in-memory database with the schema already applied.
pub async fn create_in_memory_pool() -> Result<DbPool, sqlx::Error> {
    let pool = create_pool("sqlite::memory:", 1).await?;
    let mut conn = pool.acquire().await?;
    init_schema(&mut conn).await?;
    drop(conn);
    Ok(pool)
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Whether a sqlx error is a primary-key / unique constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
