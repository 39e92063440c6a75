//! trendscope HTTP crate
//!
//! JSON endpoints over the trends use case and the individual platform sources.

use std::sync::Arc;

use axum::Router;
use trendscope_domain::{
    Summarizer,
    usecases::{PlatformSources, TrendsUseCase},
};

pub mod api;
mod error;

pub use error::ApiError;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub sources: PlatformSources,
    pub trends: Arc<TrendsUseCase>,
}

impl AppState {
    pub fn new(sources: PlatformSources, summarizer: Arc<dyn Summarizer>) -> Self {
        let trends = Arc::new(TrendsUseCase::new(sources.clone(), summarizer));
        Self { sources, trends }
    }
}

/// Build the application router
///
/// Search routes are served both at the root and under `/api`.
pub fn build_router(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::trace::TraceLayer;

    Router::new()
        .merge(api::search_routes())
        .nest("/api", api::search_routes())
        .merge(api::health_routes())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}
