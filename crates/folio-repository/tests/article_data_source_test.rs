//! Integration tests for `MySqlArticleDataSource`.
//!
//! These tests run against a real MySQL database using testcontainers and
//! need Docker; run them with `cargo test -- --ignored`.

mod common;

use common::{TestDatabase, TABLE};
use folio_core::{Article, FolioError, PageWindow};
use folio_repository::{ArticleDataSource, Filter, MySqlArticleDataSource};

fn data_source(db: &TestDatabase) -> MySqlArticleDataSource {
    MySqlArticleDataSource::new(db.pool().inner().clone(), TABLE)
}

async fn seed(source: &MySqlArticleDataSource, titles: &[&str]) -> Vec<Article> {
    let mut articles = Vec::new();
    for title in titles {
        let article = Article::new(*title, "author", "content");
        source.insert(&article).await.expect("Failed to insert article");
        articles.push(article);
    }
    articles
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_then_get_by_id() {
    let db = TestDatabase::new().await;
    let source = data_source(&db);

    let article = Article::new("Hello", "Ann", "Body");
    source.insert(&article).await.expect("Failed to insert");

    let page = source
        .get(&Filter::new().equals("id", article.id.as_str()), PageWindow::new(1, 0))
        .await
        .expect("Query failed");

    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content, vec![article]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_missing_id_returns_empty_page() {
    let db = TestDatabase::new().await;
    let source = data_source(&db);

    let page = source
        .get(&Filter::new().equals("id", "does-not-exist"), PageWindow::new(1, 0))
        .await
        .expect("Query failed");

    assert!(page.is_empty());
    assert_eq!(page.total_elements, 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_rows_ordered_by_title_with_total() {
    let db = TestDatabase::new().await;
    let source = data_source(&db);
    seed(&source, &["c", "a", "d", "b"]).await;

    let page = source
        .get(&Filter::new(), PageWindow::new(2, 1))
        .await
        .expect("Query failed");

    let titles: Vec<_> = page.content.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["b", "c"]);
    assert_eq!(page.total_elements, 4);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unbounded_window_returns_everything() {
    let db = TestDatabase::new().await;
    let source = data_source(&db);
    seed(&source, &["x", "y", "z"]).await;

    let page = source
        .get(&Filter::new(), PageWindow::new(-1, 50))
        .await
        .expect("Query failed");

    assert_eq!(page.len(), 3);
    assert_eq!(page.total_elements, 3);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_id_is_data_source_error() {
    let db = TestDatabase::new().await;
    let source = data_source(&db);

    let article = Article::new("t", "a", "c");
    source.insert(&article).await.expect("Failed to insert");

    let err = source.insert(&article).await.unwrap_err();
    assert!(matches!(err, FolioError::DataSource(_)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unknown_column_is_data_source_error() {
    let db = TestDatabase::new().await;
    let source = data_source(&db);

    let err = source
        .get(&Filter::new().equals("userid", "x"), PageWindow::unbounded())
        .await
        .unwrap_err();

    assert!(matches!(err, FolioError::DataSource(_)));
    assert_eq!(err.client_message(), "DataSource error");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_ping() {
    let db = TestDatabase::new().await;
    data_source(&db).ping().await.expect("Ping failed");
    db.pool().health_check().await.expect("Health check failed");
}
