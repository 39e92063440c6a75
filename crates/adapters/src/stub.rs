//! Stub platform source for testing

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use trendscope_domain::{Platform, PlatformItems, PlatformSource, SourceError, Topic};

use crate::parse_payload;

/// Stub source returning a canned provider payload or error
///
/// Parsing goes through the real parser for the platform, so canned payloads
/// use the provider's wire shape.
pub struct StubSource {
    platform: Platform,
    response: Result<Value, SourceError>,
    calls: AtomicUsize,
}

impl StubSource {
    /// Respond with the given provider payload
    pub fn with_payload(platform: Platform, payload: Value) -> Self {
        Self {
            platform,
            response: Ok(payload),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fail with the given error
    pub fn with_error(platform: Platform, error: SourceError) -> Self {
        Self {
            platform,
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of outbound fetches made
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlatformSource for StubSource {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn fetch_raw(&self, _topic: &Topic) -> Result<Value, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }

    fn parse(&self, payload: Value) -> Result<PlatformItems, SourceError> {
        parse_payload(self.platform, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_stub_uses_platform_parser() {
        let source = StubSource::with_payload(
            Platform::Twitter,
            json!({"data": [{"id": "7", "text": "hi"}]}),
        );

        let items = source.search("ai").await.unwrap();

        assert_eq!(items.items[0].url, "https://twitter.com/i/web/status/7");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_stub_blank_query_not_counted() {
        let source = StubSource::with_payload(Platform::Reddit, json!({"data": {}}));

        let result = source.search("").await;

        assert_eq!(result, Err(SourceError::MissingQuery));
        assert_eq!(source.calls(), 0);
    }
}
