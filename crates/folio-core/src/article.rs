//! The article entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published article.
///
/// Articles are created once and never updated or deleted. The id is an
/// opaque UUIDv4 string assigned at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Article {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
}

impl Article {
    /// Resource name used in not-found errors.
    pub const RESOURCE: &'static str = "Article";

    /// Creates a new article with a freshly generated id.
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, author, content)
    }

    /// Creates an article with a caller-supplied id.
    #[must_use]
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            content: content.into(),
        }
    }
}
