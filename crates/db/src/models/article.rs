//! Article row records.

use quill_core::article::{Article, ArticleSummary, ContentBlock};
use quill_core::types::DbId;
use sqlx::types::Json;
use sqlx::FromRow;

/// A full row from the `articles` table.
///
/// `topics` and `content_blocks` are stored as JSON arrays.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleRecord {
    pub id: DbId,
    pub title: String,
    pub date_created: String,
    pub author: String,
    pub topics: Json<Vec<String>>,
    pub article_img_link: String,
    pub content_blocks: Json<Vec<ContentBlock>>,
}

impl From<ArticleRecord> for Article {
    fn from(record: ArticleRecord) -> Self {
        Article {
            id: record.id,
            title: record.title,
            date_created: record.date_created,
            author: record.author,
            topics: record.topics.0,
            article_img_link: record.article_img_link,
            content_blocks: record.content_blocks.0,
        }
    }
}

/// A row from the `articles` table without its content blocks.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleSummaryRecord {
    pub id: DbId,
    pub title: String,
    pub date_created: String,
    pub author: String,
    pub topics: Json<Vec<String>>,
    pub article_img_link: String,
}

impl From<ArticleSummaryRecord> for ArticleSummary {
    fn from(record: ArticleSummaryRecord) -> Self {
        ArticleSummary {
            id: record.id,
            title: record.title,
            date_created: record.date_created,
            author: record.author,
            topics: record.topics.0,
            article_img_link: record.article_img_link,
        }
    }
}
