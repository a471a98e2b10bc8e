//! Service facade for the Quill blog backend.
//!
//! [`BlogService`] is the single capability set the HTTP layer talks to. Two
//! implementations exist: [`DatabaseService`], backed by the SQLite
//! repositories, and [`MockService`], backed by a fixed in-memory dataset.
//! Which one runs is decided once at startup through [`DataSource`] and
//! [`build_service`].

mod database;
mod error;
mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use quill_core::article::{Article, ArticleSummary, NewArticle};
use quill_core::thread::CommentThread;
use quill_core::types::DbId;

pub use database::DatabaseService;
pub use error::{ServiceError, ServiceResult};
pub use mock::{MockService, MOCK_ARTICLE_COUNT};

/// Operations the HTTP layer needs from a blog backend.
#[async_trait]
pub trait BlogService: Send + Sync {
    /// Short label for logs and health output (`"mock"` / `"database"`).
    fn name(&self) -> &'static str;

    /// Fetch one article. `Ok(None)` means it does not exist.
    async fn get_article(&self, id: DbId) -> ServiceResult<Option<Article>>;

    /// The nested comment thread of an article (empty if it has none).
    async fn get_comment_thread(&self, article_id: DbId) -> ServiceResult<CommentThread>;

    /// One page of summaries in ascending id order.
    async fn get_summaries(&self, limit: i64, offset: i64) -> ServiceResult<Vec<ArticleSummary>>;

    /// Total number of articles.
    async fn get_total_count(&self) -> ServiceResult<i64>;

    /// Store a new article, returning its id.
    async fn create_article(&self, input: NewArticle) -> ServiceResult<DbId>;

    /// Attach a comment thread to an existing article, returning the number
    /// of comments written.
    async fn add_comment_thread(
        &self,
        article_id: DbId,
        thread: &CommentThread,
    ) -> ServiceResult<usize>;

    /// Delete an article and its comments. Returns `true` if it existed.
    async fn delete_article(&self, id: DbId) -> ServiceResult<bool>;

    /// Whether the backing store is usable.
    async fn health_check(&self) -> ServiceResult<()>;
}

/// Where article data comes from. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The built-in read-only dataset; writes are accepted and discarded.
    Mock,
    /// A SQLite database.
    Database {
        url: String,
        max_connections: u32,
    },
}

/// Build the service selected by `source`.
///
/// For [`DataSource::Database`] this opens the pool and ensures the schema
/// exists before returning.
pub async fn build_service(source: &DataSource) -> ServiceResult<Arc<dyn BlogService>> {
    match source {
        DataSource::Mock => {
            tracing::info!("Using built-in mock dataset");
            Ok(Arc::new(MockService::new()))
        }
        DataSource::Database {
            url,
            max_connections,
        } => {
            let service = DatabaseService::connect(url, *max_connections).await?;
            tracing::info!(url = %url, max_connections, "Using SQLite database");
            Ok(Arc::new(service))
        }
    }
}
