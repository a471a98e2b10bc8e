//! Fixed in-memory dataset used when no database is configured.

use async_trait::async_trait;
use quill_core::article::{Article, ArticleSummary, ContentBlock, NewArticle};
use quill_core::thread::{Comment, CommentThread};
use quill_core::types::DbId;

use crate::error::ServiceResult;
use crate::BlogService;

/// Number of articles in the mock dataset (ids `1..=MOCK_ARTICLE_COUNT`).
pub const MOCK_ARTICLE_COUNT: i64 = 23;

const MOCK_DATE: &str = "January 10, 2026";
const MOCK_AUTHOR: &str = "_Kühaku_";
const MOCK_IMAGE: &str = "https://dummyimage.com/900x400/ced4da/6c757d.jpg";
const MOCK_AVATAR: &str = "https://dummyimage.com/50x50/ced4da/6c757d.jpg";

/// Read-only [`BlogService`] over a built-in dataset.
///
/// Writes are accepted, logged, and discarded; deletes always report success.
#[derive(Debug, Clone)]
pub struct MockService {
    articles: Vec<Article>,
}

impl MockService {
    pub fn new() -> Self {
        let articles = (1..=MOCK_ARTICLE_COUNT).map(mock_article).collect();
        Self { articles }
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

fn mock_topics() -> Vec<String> {
    ["Mock topic", "Free", "Information Theory"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn paragraph(text: &str) -> ContentBlock {
    ContentBlock {
        text: text.to_string(),
        is_header: false,
    }
}

fn header(text: &str) -> ContentBlock {
    ContentBlock {
        text: text.to_string(),
        is_header: true,
    }
}

/// The full article behind every mock id. Only listings number the title.
fn mock_article(id: DbId) -> Article {
    Article {
        id,
        title: "This is a mock Post!".to_string(),
        date_created: MOCK_DATE.to_string(),
        author: MOCK_AUTHOR.to_string(),
        topics: mock_topics(),
        article_img_link: MOCK_IMAGE.to_string(),
        content_blocks: vec![
            paragraph(
                "Science is an enterprise that should be cherished as an activity of the \
                 free human mind. Because it transforms who we are, how we live, and it \
                 gives us an understanding of our place in the universe.",
            ),
            paragraph(
                "The universe is large and old, and the ingredients for life as we know it \
                 are everywhere, so there's no reason to think that Earth would be unique \
                 in that regard. Whether of not the life became intelligent is a different \
                 question, and we'll see if we find that.",
            ),
            paragraph(
                "If you get asteroids about a kilometer in size, those are large enough and \
                 carry enough energy into our system to disrupt transportation, \
                 communication, the food chains, and that can be a really bad day on Earth.",
            ),
            header("I have odd cosmic thoughts every day"),
            paragraph(
                "For me, the most fascinating interface is Twitter. I have odd cosmic \
                 thoughts every day and I realized I could hold them to myself or share \
                 them with people who might be interested.",
            ),
            paragraph(
                "Venus has a runaway greenhouse effect. I kind of want to know what happened \
                 there because we're twirling knobs here on Earth without knowing the \
                 consequences of it. Mars once had running water. It's bone dry today. \
                 Something bad happened there as well.",
            ),
        ],
    }
}

fn mock_summary(article: &Article) -> ArticleSummary {
    ArticleSummary {
        title: format!("{} {}", article.title, article.id),
        ..article.summary()
    }
}

fn mock_thread() -> CommentThread {
    CommentThread {
        comments: vec![
            Comment::new(
                "Head Comment",
                "If you're going to lead a space frontier, it has to be government; it'll \
                 never be private enterprise. Because the space frontier is dangerous, and \
                 it's expensive, and it has unquantified risks.",
                MOCK_AVATAR,
            )
            .with_replies(vec![
                Comment::new(
                    "Commenter Name",
                    "And under those conditions, you cannot establish a capital-market \
                     evaluation of that enterprise. You can't get investors.",
                    MOCK_AVATAR,
                ),
                Comment::new(
                    "Commenter Name",
                    "When you put money directly to a problem, it makes a good headline.",
                    MOCK_AVATAR,
                ),
            ]),
            Comment::new(
                "Commenter Name",
                "When I look at the universe and all the ways the universe wants to kill \
                 us, I find it hard to reconcile that with statements of beneficence.",
                MOCK_AVATAR,
            ),
        ],
    }
}

#[async_trait]
impl BlogService for MockService {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn get_article(&self, id: DbId) -> ServiceResult<Option<Article>> {
        Ok(self.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn get_comment_thread(&self, _article_id: DbId) -> ServiceResult<CommentThread> {
        Ok(mock_thread())
    }

    async fn get_summaries(&self, limit: i64, offset: i64) -> ServiceResult<Vec<ArticleSummary>> {
        let start = usize::try_from(offset).unwrap_or(0);
        let take = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .articles
            .iter()
            .skip(start)
            .take(take)
            .map(mock_summary)
            .collect())
    }

    async fn get_total_count(&self) -> ServiceResult<i64> {
        Ok(self.articles.len() as i64)
    }

    async fn create_article(&self, input: NewArticle) -> ServiceResult<DbId> {
        let id = input.id.unwrap_or(MOCK_ARTICLE_COUNT + 1);
        tracing::info!(article_id = id, title = %input.title, "[mock] Would create article");
        Ok(id)
    }

    async fn add_comment_thread(
        &self,
        article_id: DbId,
        thread: &CommentThread,
    ) -> ServiceResult<usize> {
        let count = thread.len();
        tracing::info!(article_id, count, "[mock] Would store comment thread");
        Ok(count)
    }

    async fn delete_article(&self, id: DbId) -> ServiceResult<bool> {
        tracing::info!(article_id = id, "[mock] Would delete article");
        Ok(true)
    }

    async fn health_check(&self) -> ServiceResult<()> {
        Ok(())
    }
}
