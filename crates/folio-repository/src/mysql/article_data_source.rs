//! MySQL article data source.

use crate::{traits::ArticleDataSource, Filter, Joiner};
use async_trait::async_trait;
use folio_core::{Article, FolioError, FolioResult, Page, PageWindow};
use sqlx::mysql::MySqlPool;
use sqlx::{MySql, QueryBuilder};
use tracing::debug;

const ARTICLE_COLUMNS: &str = "id, title, author, content";

/// Article data source backed by a single MySQL table.
#[derive(Clone)]
pub struct MySqlArticleDataSource {
    pool: MySqlPool,
    table: String,
}

impl MySqlArticleDataSource {
    /// Creates a data source over `table`.
    ///
    /// The table name is interpolated into every statement and must be a
    /// plain identifier; configuration loading enforces this.
    #[must_use]
    pub fn new(pool: MySqlPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }
}

/// Builds `SELECT COUNT(id) FROM <table>[ WHERE ...]`.
pub fn count_statement<'a>(table: &str, filter: &Filter) -> QueryBuilder<'a, MySql> {
    let mut builder = QueryBuilder::new(format!("SELECT COUNT(id) FROM {table}"));
    filter.push_where(&mut builder, Joiner::And);
    builder
}

/// Builds the row fetch, ordered by title, windowed only when bounded.
pub fn select_statement<'a>(
    table: &str,
    filter: &Filter,
    window: PageWindow,
) -> QueryBuilder<'a, MySql> {
    let mut builder = QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM {table}"));
    filter.push_where(&mut builder, Joiner::And);
    builder.push(" ORDER BY title");
    if window.is_bounded() {
        builder.push(" LIMIT ");
        builder.push_bind(window.limit);
        builder.push(" OFFSET ");
        builder.push_bind(window.offset.max(0));
    }
    builder
}

/// Builds the `CREATE TABLE IF NOT EXISTS` statement for the article table.
#[must_use]
pub fn schema_statement(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (\
         id VARCHAR(255) NOT NULL, \
         title VARCHAR(255) NOT NULL, \
         author VARCHAR(255) NOT NULL, \
         content VARCHAR(255) NOT NULL, \
         PRIMARY KEY (id))"
    )
}

#[async_trait]
impl ArticleDataSource for MySqlArticleDataSource {
    async fn insert(&self, article: &Article) -> FolioResult<()> {
        debug!(id = %article.id, "Inserting article");

        let statement = format!(
            "INSERT INTO {} ({ARTICLE_COLUMNS}) VALUES (?, ?, ?, ?)",
            self.table
        );
        sqlx::query(&statement)
            .bind(&article.id)
            .bind(&article.title)
            .bind(&article.author)
            .bind(&article.content)
            .execute(&self.pool)
            .await
            .map_err(|e| FolioError::data_source(format!("insert failed: {e}")))?;

        Ok(())
    }

    async fn get(&self, filter: &Filter, window: PageWindow) -> FolioResult<Page<Article>> {
        debug!(
            filter = %filter,
            limit = window.limit,
            offset = window.offset,
            "Fetching articles"
        );

        let total: i64 = count_statement(&self.table, filter)
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| FolioError::data_source(format!("count failed: {e}")))?;

        let articles: Vec<Article> = select_statement(&self.table, filter, window)
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| FolioError::data_source(format!("select failed: {e}")))?;

        Ok(Page::new(
            articles,
            u64::try_from(total).unwrap_or_default(),
            window,
        ))
    }

    async fn ping(&self) -> FolioResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| FolioError::data_source(format!("ping failed: {e}")))?;
        Ok(())
    }
}

impl std::fmt::Debug for MySqlArticleDataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlArticleDataSource")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}
