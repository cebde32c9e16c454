//! Data source trait definitions.

use crate::Filter;
use async_trait::async_trait;
use folio_core::{Article, FolioResult, Page, PageWindow};

/// Storage for articles.
///
/// Implementations report every backend failure as
/// [`folio_core::FolioError::DataSource`].
#[async_trait]
pub trait ArticleDataSource: Send + Sync {
    /// Inserts an article. The id is assigned by the caller.
    async fn insert(&self, article: &Article) -> FolioResult<()>;

    /// Fetches the articles matching `filter`, ordered by title.
    ///
    /// The returned page carries the total number of matching rows, which
    /// does not depend on `window`.
    async fn get(&self, filter: &Filter, window: PageWindow) -> FolioResult<Page<Article>>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> FolioResult<()>;
}
