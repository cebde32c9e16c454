//! Article service trait definition.

use crate::dto::{ArticleListResponse, ArticleResponse, CreateArticleRequest, CreatedArticleResponse};
use async_trait::async_trait;
use folio_core::{FolioResult, PageRequest};

/// Article service trait.
#[async_trait]
pub trait ArticleService: Send + Sync {
    /// Creates an article and returns its generated id.
    async fn insert_article(&self, request: CreateArticleRequest) -> FolioResult<CreatedArticleResponse>;

    /// Gets a single article by id.
    async fn get_article(&self, id: &str) -> FolioResult<ArticleResponse>;

    /// Lists articles ordered by title.
    async fn get_all_articles(&self, page: PageRequest) -> FolioResult<ArticleListResponse>;
}
