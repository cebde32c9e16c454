//! Article controller.

use crate::{
    extractors::{ArticleId, PageParams, ValidatedJson},
    responses::{created, ok, ApiResult, Envelope},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Router,
};
use folio_service::{ArticleResponse, CreateArticleRequest, CreatedArticleResponse};
use tracing::debug;

/// Creates the article router.
///
/// Unsupported methods on a known path get a 405 envelope.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/articles",
            get(list_articles)
                .post(create_article)
                .fallback(method_not_allowed),
        )
        .route(
            "/articles/:id",
            get(get_article).fallback(method_not_allowed),
        )
}

/// List articles ordered by title.
async fn list_articles(
    State(state): State<AppState>,
    PageParams(page): PageParams,
) -> ApiResult<Vec<ArticleResponse>> {
    debug!("List articles request, page: {}, limit: {}", page.page, page.limit);

    let response = state.article_service.get_all_articles(page).await?;
    Ok(Envelope::success(StatusCode::OK, response.articles).with_total(response.total))
}

/// Create an article.
async fn create_article(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateArticleRequest>,
) -> ApiResult<CreatedArticleResponse> {
    debug!("Create article request: {}", request.title);

    let response = state.article_service.insert_article(request).await?;
    created(response)
}

/// Get an article by id.
async fn get_article(
    State(state): State<AppState>,
    ArticleId(id): ArticleId,
) -> ApiResult<ArticleResponse> {
    debug!("Get article request: {}", id);

    let response = state.article_service.get_article(&id).await?;
    ok(response)
}

pub(crate) async fn method_not_allowed() -> Envelope<()> {
    Envelope::message(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
