//! HTTP route handlers

mod health;
mod search;
mod trends;

pub use health::{HealthResponse, health_check, health_routes};
pub use search::{missing_query, search_reddit, search_twitter, search_youtube};
pub use trends::{TrendsQuery, get_trends};

use axum::{Router, routing::get};

use crate::AppState;

/// Platform search and trends routes (GET only)
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/reddit/{query}", get(search_reddit))
        .route("/twitter/{query}", get(search_twitter))
        .route("/youtube/{query}", get(search_youtube))
        .route("/reddit", get(missing_query))
        .route("/reddit/", get(missing_query))
        .route("/twitter", get(missing_query))
        .route("/twitter/", get(missing_query))
        .route("/youtube", get(missing_query))
        .route("/youtube/", get(missing_query))
        .route("/trends", get(get_trends))
}
