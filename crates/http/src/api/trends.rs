//! Aggregated trends endpoint

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use trendscope_domain::TrendsResponse;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct TrendsQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /trends?q=topic
pub async fn get_trends(
    State(state): State<AppState>,
    Query(query): Query<TrendsQuery>,
) -> Result<Json<TrendsResponse>, ApiError> {
    let topic = query.q.unwrap_or_default();
    let response = state.trends.run(&topic).await?;
    Ok(Json(response))
}
