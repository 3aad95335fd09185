use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use pn_content::FetchError;
use pn_core::{
    dates, headlines,
    keywords::{keyword_counts, parse_keywords, KeywordCounts},
    page::{Page, PageParams, Paginated},
    search, Article, Headline, Params, RawQuery,
};
use pn_export::{build_report, filename, render_docx, DOCX_MIME};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::AppState;

const CONTENT_NOT_FOUND: &str = "عذراً، لم يتم العثور على محتوى المقال الكامل.";
const CONTENT_FETCH_FAILED: &str = "عذراً، حدث خطأ في تحميل محتوى المقال.";

/// Query string pairs in arrival order. Repeated keys are accepted here and
/// resolved by [`Params`].
type QueryPairs = Query<Vec<(String, String)>>;

pub async fn search_articles(
    State(state): State<Arc<AppState>>,
    Query(pairs): QueryPairs,
) -> Response {
    let params = Params::from_pairs(pairs);
    let raw = RawQuery::from_params(&params);
    let paging = PageParams::from_params(&params);
    let query = pn_core::Query::from_raw(&raw);
    let outcome = search(state.dataset.articles(), &query);

    let limits = &state.config.search;
    let page = Page::from_params(&paging, limits.default_per_page, limits.max_per_page);
    debug!(
        "Search {:?} matched {} articles (page {})",
        raw, outcome.total_count, page.page
    );

    let articles: Vec<&Article> = page.slice(&outcome.matches).to_vec();
    Json(Paginated::new(page, outcome.total_count, articles)).into_response()
}

pub async fn statistics(State(state): State<Arc<AppState>>) -> Response {
    Json(&state.overview.stats).into_response()
}

pub async fn timeline(State(state): State<Arc<AppState>>) -> Response {
    Json(&state.overview.timeline).into_response()
}

pub async fn overview(State(state): State<Arc<AppState>>) -> Response {
    Json(&state.overview).into_response()
}

pub async fn keyword_analysis(
    State(state): State<Arc<AppState>>,
    Query(pairs): QueryPairs,
) -> Json<KeywordCounts> {
    let params = Params::from_pairs(pairs);
    let keywords = parse_keywords(params.get("keywords").unwrap_or_default());
    Json(keyword_counts(state.dataset.articles(), &keywords))
}

#[derive(Debug, Serialize)]
pub struct HeadlineView {
    #[serde(flatten)]
    pub headline: Headline,
    pub date_label: String,
}

pub async fn headlines_by_date(
    State(state): State<Arc<AppState>>,
    Query(pairs): QueryPairs,
) -> Json<Paginated<HeadlineView>> {
    let params = Params::from_pairs(pairs);
    let paging = PageParams::from_params(&params);
    let date = params.get("date").unwrap_or_default().trim();
    let found = headlines::headlines(state.dataset.articles(), date);

    let page = Page::from_params(
        &paging,
        state.config.headlines.default_per_page,
        state.config.search.max_per_page,
    );
    let date_label = dates::format_arabic(date);
    let views = page
        .slice(&found)
        .iter()
        .cloned()
        .map(|headline| HeadlineView {
            headline,
            date_label: date_label.clone(),
        })
        .collect();

    Json(Paginated::new(page, found.len(), views))
}

/// Non-numeric ids are reported as unknown articles.
fn article_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            debug!("Rejected article path: {}", rejection);
            Err(ApiError::not_found("Article not found"))
        }
    }
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = article_id(path)?;
    let article = state
        .dataset
        .find(id)
        .ok_or_else(|| ApiError::not_found("Article not found"))?;
    Ok(Json(article).into_response())
}

pub async fn get_article_content(
    State(state): State<Arc<AppState>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = article_id(path)?;
    let article = state
        .dataset
        .find(id)
        .ok_or_else(|| ApiError::not_found("Article not found"))?;
    if article.link.is_empty() {
        return Err(ApiError::not_found("Article URL not found"));
    }

    let content = match state.content.fetch(&article.link).await {
        Ok(content) => content,
        Err(FetchError::NotFound) => CONTENT_NOT_FOUND.to_string(),
        Err(e) => {
            warn!("Error fetching article content for {}: {}", article.link, e);
            CONTENT_FETCH_FAILED.to_string()
        }
    };

    Ok(Json(json!({ "content": content })))
}

pub async fn export_word(
    State(state): State<Arc<AppState>>,
    Query(pairs): QueryPairs,
) -> Result<Response, ApiError> {
    let params = Params::from_pairs(pairs);
    let date = params.get("date").unwrap_or_default().trim();
    if date.is_empty() {
        return Err(ApiError::bad_request("Date parameter is required"));
    }
    let include_content = params
        .get("include_content")
        .is_some_and(|value| value.eq_ignore_ascii_case("true"));

    let articles = headlines::articles_on(state.dataset.articles(), date);
    if articles.is_empty() {
        return Err(ApiError::not_found("No articles found for the specified date"));
    }

    let content = include_content.then(|| state.content.as_ref());
    let report = build_report(date, &articles, content, chrono::Local::now().naive_local()).await;
    let bytes = render_docx(&report).map_err(|e| {
        warn!("Word export for {} failed: {}", date, e);
        ApiError::internal("Failed to create Word document")
    })?;

    info!(
        "📄 Exported {} articles for {} ({} bytes, full content: {})",
        articles.len(),
        date,
        bytes.len(),
        include_content
    );
    let headers = [
        (header::CONTENT_TYPE, DOCX_MIME.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename(date)),
        ),
    ];
    Ok((headers, bytes).into_response())
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "articles": state.dataset.len(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
