//! Shared request handling for source adapters

use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;
use trendscope_domain::SourceError;

/// Longest upstream body excerpt kept in an error message
pub(crate) const MAX_ERROR_BODY: usize = 200;

/// Send a request and decode a JSON body, classifying failures
///
/// Request URLs can carry an API key, so error text never includes them.
pub(crate) async fn send_json(request: RequestBuilder) -> Result<Value, SourceError> {
    let response = request
        .send()
        .await
        .map_err(|e| SourceError::Network(e.without_url().to_string()))?;

    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(SourceError::Auth(format!("upstream returned {}", status)));
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SourceError::Api {
            status: status.as_u16(),
            message: truncate(&body, MAX_ERROR_BODY),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| SourceError::Shape(format!("body is not JSON: {}", e.without_url())))
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("héllo", 2), "hé...");
    }
}
