//! Request handlers for the UI page and the JSON API.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::templates;
use super::AppState;
use crate::models::{ScrapeOutcome, ScrapedDocument, SummaryRecord};
use crate::pagination::{PageRequest, Pagination};

/// Success envelope shared by every JSON endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// `page` is kept as text so bad input can be clamped instead of rejected.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    fn request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct FullTextsData {
    pub full_texts: Vec<ScrapedDocument>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct SummariesData {
    pub summaries: Vec<SummaryRecord>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub full_texts: u64,
    pub summaries: u64,
}

/// Single-page UI.
pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

/// Run the write path for the submitted URL.
pub async fn scrape(
    State(state): State<AppState>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ScrapeOutcome>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let url = request
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::BadRequest("URL is required".to_string()))?;

    let outcome = state.scraper.scrape(url).await?;
    Ok(ApiResponse::ok(outcome))
}

/// One page of full-content records.
pub async fn full_texts(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<FullTextsData>>, ApiError> {
    let page = state.archive.full_texts(query.request()).await?;
    Ok(ApiResponse::ok(FullTextsData {
        full_texts: page.items,
        pagination: page.pagination,
    }))
}

/// One page of summaries.
pub async fn summaries(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<SummariesData>>, ApiError> {
    let page = state.archive.summaries(query.request()).await?;
    Ok(ApiResponse::ok(SummariesData {
        summaries: page.items,
        pagination: page.pagination,
    }))
}

/// Store reachability and record counts.
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthData>>, ApiError> {
    let (full_texts, summaries) = state.archive.counts().await?;
    Ok(ApiResponse::ok(HealthData {
        full_texts,
        summaries,
    }))
}
