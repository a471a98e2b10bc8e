//! Repository-backed service.

use async_trait::async_trait;
use quill_core::article::{Article, ArticleSummary, NewArticle};
use quill_core::error::CoreError;
use quill_core::thread::CommentThread;
use quill_core::types::DbId;
use quill_db::repositories::{ArticleRepo, CommentRepo};
use quill_db::{create_pool, init_schema, is_unique_violation, DbPool};

use crate::error::{ServiceError, ServiceResult};
use crate::BlogService;

/// [`BlogService`] backed by the SQLite repositories.
///
/// Every operation is one unit of work on one pooled connection. The
/// connection goes back to the pool when its guard drops, whether the
/// operation succeeded or not.
#[derive(Clone)]
pub struct DatabaseService {
    pool: DbPool,
}

impl DatabaseService {
    /// Open a pool for `database_url` and ensure the schema exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> ServiceResult<Self> {
        let pool = create_pool(database_url, max_connections).await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, ensuring the schema exists.
    pub async fn from_pool(pool: DbPool) -> ServiceResult<Self> {
        let mut conn = pool.acquire().await?;
        init_schema(&mut conn).await?;
        drop(conn);
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl BlogService for DatabaseService {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn get_article(&self, id: DbId) -> ServiceResult<Option<Article>> {
        let mut conn = self.pool.acquire().await?;
        Ok(ArticleRepo::find_by_id(&mut conn, id).await?)
    }

    async fn get_comment_thread(&self, article_id: DbId) -> ServiceResult<CommentThread> {
        let mut conn = self.pool.acquire().await?;
        Ok(CommentRepo::get_thread(&mut conn, article_id).await?)
    }

    async fn get_summaries(&self, limit: i64, offset: i64) -> ServiceResult<Vec<ArticleSummary>> {
        let mut conn = self.pool.acquire().await?;
        Ok(ArticleRepo::list_summaries(&mut conn, limit, offset).await?)
    }

    async fn get_total_count(&self) -> ServiceResult<i64> {
        let mut conn = self.pool.acquire().await?;
        Ok(ArticleRepo::count(&mut conn).await?)
    }

    async fn create_article(&self, input: NewArticle) -> ServiceResult<DbId> {
        let mut conn = self.pool.acquire().await?;
        let id = ArticleRepo::insert(&mut conn, &input).await.map_err(|err| {
            if is_unique_violation(&err) {
                ServiceError::DuplicateKey {
                    entity: "Article",
                    id: input.id.unwrap_or_default(),
                }
            } else {
                ServiceError::from(err)
            }
        })?;
        tracing::info!(article_id = id, title = %input.title, "Article created");
        Ok(id)
    }

    async fn add_comment_thread(
        &self,
        article_id: DbId,
        thread: &CommentThread,
    ) -> ServiceResult<usize> {
        let mut conn = self.pool.acquire().await?;
        if !ArticleRepo::exists(&mut conn, article_id).await? {
            return Err(CoreError::NotFound {
                entity: "Article",
                id: article_id,
            }
            .into());
        }
        let inserted = CommentRepo::insert_tree(&mut conn, article_id, thread).await?;
        let total = CommentRepo::count_for_article(&mut conn, article_id).await?;
        tracing::info!(article_id, inserted, total, "Comment thread stored");
        Ok(inserted)
    }

    async fn delete_article(&self, id: DbId) -> ServiceResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let deleted = ArticleRepo::delete(&mut conn, id).await?;
        if deleted {
            tracing::info!(article_id = id, "Article deleted");
        }
        Ok(deleted)
    }

    async fn health_check(&self) -> ServiceResult<()> {
        quill_db::health_check(&self.pool).await?;
        Ok(())
    }
}
