//! Article service implementation.

use crate::article_service::ArticleService;
use crate::dto::{ArticleListResponse, ArticleResponse, CreateArticleRequest, CreatedArticleResponse};
use async_trait::async_trait;
use folio_core::{messages, Article, FolioError, FolioResult, PageRequest, PageWindow, ValidateExt};
use folio_repository::{ArticleDataSource, Filter};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Article service over an [`ArticleDataSource`].
#[derive(Clone)]
pub struct ArticleServiceImpl {
    data_source: Arc<dyn ArticleDataSource>,
}

impl ArticleServiceImpl {
    /// Creates a new article service.
    pub fn new(data_source: Arc<dyn ArticleDataSource>) -> Self {
        Self { data_source }
    }
}

/// Logs the backend cause and replaces it with the generic client text.
fn data_source_failure(operation: &str, err: &FolioError) -> FolioError {
    error!(operation, error = %err, "Data source failure");
    FolioError::data_source(messages::DATA_SOURCE)
}

#[async_trait]
impl ArticleService for ArticleServiceImpl {
    async fn insert_article(&self, request: CreateArticleRequest) -> FolioResult<CreatedArticleResponse> {
        request.validate_request()?;

        let article = Article::new(request.title, request.author, request.content);
        debug!("Creating article: {}", article.id);

        self.data_source
            .insert(&article)
            .await
            .map_err(|e| data_source_failure("insert_article", &e))?;

        info!("Article created: {}", article.id);
        Ok(CreatedArticleResponse { id: article.id })
    }

    async fn get_article(&self, id: &str) -> FolioResult<ArticleResponse> {
        debug!("Getting article: {}", id);

        let page = self
            .data_source
            .get(&Filter::new().equals("id", id), PageWindow::new(1, 0))
            .await
            .map_err(|e| data_source_failure("get_article", &e))?;

        page.into_iter()
            .next()
            .map(ArticleResponse::from)
            .ok_or_else(|| FolioError::not_found(Article::RESOURCE, id))
    }

    async fn get_all_articles(&self, page: PageRequest) -> FolioResult<ArticleListResponse> {
        debug!("Listing articles, page: {}, limit: {}", page.page, page.limit);

        let articles = self
            .data_source
            .get(&Filter::new(), page.window())
            .await
            .map_err(|e| data_source_failure("get_all_articles", &e))?;

        Ok(ArticleListResponse::from(articles))
    }
}
