//! Twitter (X) API v2 recent-search adapter

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use trendscope_domain::{
    NO_TITLE, Platform, PlatformItem, PlatformItems, PlatformSource, SourceError, Topic,
};

use crate::http::send_json;

pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com";
pub const DEFAULT_MAX_RESULTS: u32 = 11;

/// Title length before truncation, in characters
const TITLE_CHARS: usize = 60;

/// Twitter recent search, authenticated with an app bearer token
pub struct TwitterSource {
    client: Client,
    bearer_token: Option<SecretString>,
    base_url: String,
    max_results: u32,
}

impl TwitterSource {
    pub fn new(client: Client, bearer_token: Option<SecretString>) -> Self {
        Self::with_base_url(client, bearer_token, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(
        client: Client,
        bearer_token: Option<SecretString>,
        base_url: String,
    ) -> Self {
        Self {
            client,
            bearer_token,
            base_url,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Tweet>,
}

#[derive(Deserialize)]
struct Tweet {
    id: Option<String>,
    #[serde(default)]
    text: String,
}

fn tweet_title(text: &str) -> String {
    if text.chars().count() > TITLE_CHARS {
        let head: String = text.chars().take(TITLE_CHARS).collect();
        format!("{}...", head)
    } else if text.trim().is_empty() {
        NO_TITLE.to_string()
    } else {
        text.to_string()
    }
}

/// Map a recent-search response into normalized items
pub fn parse_search(payload: Value) -> Result<PlatformItems, SourceError> {
    let response: SearchResponse = serde_json::from_value(payload)
        .map_err(|e| SourceError::Shape(format!("twitter search: {}", e)))?;

    let items = response
        .data
        .into_iter()
        .map(|tweet| PlatformItem {
            title: tweet_title(&tweet.text),
            url: tweet
                .id
                .map(|id| format!("https://twitter.com/i/web/status/{}", id))
                .unwrap_or_default(),
            description: tweet.text,
            thumbnail: String::new(),
        })
        .collect();

    Ok(PlatformItems::new(items))
}

#[async_trait]
impl PlatformSource for TwitterSource {
    fn platform(&self) -> Platform {
        Platform::Twitter
    }

    async fn fetch_raw(&self, topic: &Topic) -> Result<Value, SourceError> {
        let token = self
            .bearer_token
            .as_ref()
            .ok_or_else(|| SourceError::MissingCredential("twitter bearer token".to_string()))?;

        tracing::info!(topic = %topic, "Searching Twitter");

        let url = format!("{}/2/tweets/search/recent", self.base_url);
        let max_results = self.max_results.to_string();

        let request = self
            .client
            .get(&url)
            .query(&[("query", topic.as_str()), ("max_results", max_results.as_str())])
            .header(
                "Authorization",
                format!("Bearer {}", token.expose_secret().trim()),
            );

        send_json(request).await
    }

    fn parse(&self, payload: Value) -> Result<PlatformItems, SourceError> {
        parse_search(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(server: &MockServer, token: Option<&str>) -> TwitterSource {
        TwitterSource::with_base_url(
            Client::new(),
            token.map(|t| SecretString::new(t.into())),
            server.uri(),
        )
    }

    #[tokio::test]
    async fn test_search_success() {
        let mock_server = MockServer::start().await;
        let long_text = "a".repeat(75);

        Mock::given(method("GET"))
            .and(path("/2/tweets/search/recent"))
            .and(query_param("query", "rust lang"))
            .and(query_param("max_results", "11"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": "1", "text": "Short tweet"},
                    {"id": "2", "text": long_text},
                    {"id": "3", "text": ""}
                ],
                "meta": {"result_count": 3}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        // surrounding whitespace in the configured token is ignored
        let items = source(&mock_server, Some(" test-token\n"))
            .search("rust lang")
            .await
            .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items.items[0].title, "Short tweet");
        assert_eq!(items.items[0].url, "https://twitter.com/i/web/status/1");
        assert_eq!(items.items[1].title, format!("{}...", "a".repeat(60)));
        assert_eq!(items.items[1].description, long_text);
        assert_eq!(items.items[2].title, "No title");
        assert!(items.items.iter().all(|i| i.thumbnail.is_empty()));
    }

    #[tokio::test]
    async fn test_search_no_results() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2/tweets/search/recent"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"meta": {"result_count": 0}})),
            )
            .mount(&mock_server)
            .await;

        let items = source(&mock_server, Some("t")).search("ai").await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_missing_token_fails_without_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let result = source(&mock_server, None).search("ai").await;

        assert!(matches!(result, Err(SourceError::MissingCredential(_))));
    }

    #[tokio::test]
    async fn test_auth_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2/tweets/search/recent"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let result = source(&mock_server, Some("bad-token")).search("ai").await;

        assert!(matches!(result, Err(SourceError::Auth(_))));
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let result = source(&mock_server, Some("t")).search(" ").await;

        assert_eq!(result, Err(SourceError::MissingQuery));
    }

    #[test]
    fn test_title_truncates_on_char_boundary() {
        let text = "é".repeat(61);
        assert_eq!(tweet_title(&text), format!("{}...", "é".repeat(60)));
        assert_eq!(tweet_title(&"é".repeat(60)), "é".repeat(60));
    }

    #[test]
    fn test_blank_text_has_no_title() {
        assert_eq!(tweet_title(""), "No title");
        assert_eq!(tweet_title("  \n\t"), "No title");

        let items = parse_search(json!({"data": [{"id": "7", "text": "   "}]})).unwrap();
        assert_eq!(items.items[0].title, "No title");
        assert_eq!(items.items[0].description, "   ");
    }

    #[test]
    fn test_parse_rejects_non_array_data() {
        let result = parse_search(json!({"data": "x"}));
        assert!(matches!(result, Err(SourceError::Shape(_))));

        let result = parse_search(json!({"data": [{"id": 7, "text": "numeric id"}]}));
        assert!(matches!(result, Err(SourceError::Shape(_))));
    }
}
