//! Article DTOs.

use folio_core::{Article, Page};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Request to create an article.
///
/// Fields are trimmed on deserialization; a missing field deserializes as
/// empty and is then rejected by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateArticleRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Article response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            author: article.author,
            content: article.content,
        }
    }
}

/// Response to a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedArticleResponse {
    pub id: String,
}

/// A page of articles plus the number of articles overall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleResponse>,
    pub total: u64,
}

impl From<Page<Article>> for ArticleListResponse {
    fn from(page: Page<Article>) -> Self {
        let total = page.total_elements;
        Self {
            articles: page.map(ArticleResponse::from).content,
            total,
        }
    }
}
