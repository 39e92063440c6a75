//! Per-platform search endpoints

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;
use trendscope_domain::{Platform, PlatformItems, Topic};

use crate::{ApiError, AppState};

async fn search_platform(
    state: &AppState,
    platform: Platform,
    query: &str,
) -> Result<Json<PlatformItems>, ApiError> {
    state
        .sources
        .get(platform)
        .search(query)
        .await
        .map(Json)
        .map_err(|e| ApiError::source(platform, e))
}

/// GET /reddit/{query}
pub async fn search_reddit(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<PlatformItems>, ApiError> {
    search_platform(&state, Platform::Reddit, &query).await
}

/// GET /twitter/{query}
pub async fn search_twitter(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<PlatformItems>, ApiError> {
    search_platform(&state, Platform::Twitter, &query).await
}

/// GET /youtube/{query}
///
/// Returns the provider payload without normalization.
pub async fn search_youtube(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let topic = Topic::parse(&query).ok_or(ApiError::MissingQuery)?;

    state
        .sources
        .youtube
        .fetch_raw(&topic)
        .await
        .map(Json)
        .map_err(|e| ApiError::source(Platform::YouTube, e))
}

/// Platform route hit without a query segment
pub async fn missing_query() -> ApiError {
    ApiError::MissingQuery
}
