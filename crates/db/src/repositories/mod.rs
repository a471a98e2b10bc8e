//! Repositories for the `articles` and `comments` tables.

mod article_repo;
mod comment_repo;

pub use article_repo::ArticleRepo;
pub use comment_repo::CommentRepo;
