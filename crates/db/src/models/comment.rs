//! Comment row records.

use quill_core::thread::CommentRow;
use quill_core::types::DbId;
use sqlx::FromRow;

/// A row from the `comments` table, minus the owning article id.
#[derive(Debug, Clone, FromRow)]
pub struct CommentRecord {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    pub author_name: String,
    pub text: String,
    pub avatar_url: String,
}

impl From<CommentRecord> for CommentRow {
    fn from(record: CommentRecord) -> Self {
        CommentRow {
            id: record.id,
            parent_id: record.parent_id,
            author_name: record.author_name,
            text: record.text,
            avatar_url: record.avatar_url,
        }
    }
}
