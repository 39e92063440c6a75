//! Mapping of domain errors onto JSON error responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use trendscope_domain::{Platform, SourceError, usecases::TrendsError};

/// Errors returned by HTTP handlers
///
/// Upstream details are logged, never sent to the client.
#[derive(Debug)]
pub enum ApiError {
    MissingQuery,
    MissingTopic,
    Source {
        platform: Platform,
        error: SourceError,
    },
    Trends(TrendsError),
}

impl ApiError {
    pub fn source(platform: Platform, error: SourceError) -> Self {
        if error.is_validation() {
            ApiError::MissingQuery
        } else {
            ApiError::Source { platform, error }
        }
    }
}

impl From<TrendsError> for ApiError {
    fn from(error: TrendsError) -> Self {
        match error {
            TrendsError::MissingTopic => ApiError::MissingTopic,
            other => ApiError::Trends(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingQuery => (StatusCode::BAD_REQUEST, "No query provided".to_string()),
            ApiError::MissingTopic => (StatusCode::BAD_REQUEST, "No topic provided".to_string()),
            ApiError::Source { platform, error } => {
                tracing::error!(platform = %platform, error = %error, "Platform search failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to fetch {} data", platform.display_name()),
                )
            }
            ApiError::Trends(error) => {
                tracing::error!(error = %error, "Trends request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch trends".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
