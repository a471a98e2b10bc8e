//! Article, content block, and summary types plus create-payload validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

/// One paragraph (or heading) of an article body.
///
/// Blocks have no identity of their own; their position inside
/// [`Article::content_blocks`] is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub text: String,
    /// Render with emphasis (section heading).
    pub is_header: bool,
}

/// A full article as stored and served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    /// Free-form display date; never parsed.
    pub date_created: String,
    pub author: String,
    pub topics: Vec<String>,
    pub article_img_link: String,
    pub content_blocks: Vec<ContentBlock>,
}

impl Article {
    /// Project this article onto its list-view summary.
    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            id: self.id,
            title: self.title.clone(),
            date_created: self.date_created.clone(),
            author: self.author.clone(),
            topics: self.topics.clone(),
            article_img_link: self.article_img_link.clone(),
        }
    }
}

/// An article without its body, used for paginated listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: DbId,
    pub title: String,
    pub date_created: String,
    pub author: String,
    pub topics: Vec<String>,
    pub article_img_link: String,
}

/// DTO for creating an article.
///
/// `id` may be omitted, in which case storage assigns the next free id.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewArticle {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: Option<DbId>,
    #[validate(custom(function = "not_blank", message = "title must not be empty"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "date_created must not be empty"))]
    pub date_created: String,
    #[validate(custom(function = "not_blank", message = "author must not be empty"))]
    pub author: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub article_img_link: String,
    #[serde(default)]
    pub content_blocks: Vec<ContentBlock>,
}

impl NewArticle {
    /// Build the stored article once its id is known.
    pub fn into_article(self, id: DbId) -> Article {
        Article {
            id,
            title: self.title,
            date_created: self.date_created,
            author: self.author,
            topics: self.topics,
            article_img_link: self.article_img_link,
            content_blocks: self.content_blocks,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Validate a create payload, flattening all field errors into a single
/// [`CoreError::Validation`] message.
pub fn validate_new_article(input: &NewArticle) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(flatten_errors(&errors)))
}

/// Render validation errors as `field: message` pairs, sorted by field name.
pub(crate) fn flatten_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
