//! YouTube Data API v3 search adapter

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use trendscope_domain::{Platform, PlatformItem, PlatformItems, PlatformSource, SourceError, Topic};

use crate::http::send_json;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
pub const DEFAULT_MAX_RESULTS: u32 = 5;

/// YouTube search, authenticated with an API key query parameter
pub struct YouTubeSource {
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
    max_results: u32,
}

impl YouTubeSource {
    pub fn new(client: Client, api_key: Option<SecretString>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(client: Client, api_key: Option<SecretString>, base_url: String) -> Self {
        Self {
            client,
            api_key,
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
    items: Vec<SearchResult>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SearchResult {
    snippet: Snippet,
    id: ResultId,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Snippet {
    title: Option<String>,
    description: Option<String>,
    thumbnails: Thumbnails,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Thumbnails {
    medium: Thumbnail,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Thumbnail {
    url: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ResultId {
    // absent for channel and playlist results
    video_id: Option<String>,
}

/// Map a search response into normalized items
pub fn parse_search(payload: Value) -> Result<PlatformItems, SourceError> {
    let response: SearchResponse = serde_json::from_value(payload)
        .map_err(|e| SourceError::Shape(format!("youtube search: {}", e)))?;

    let items = response
        .items
        .into_iter()
        .map(|result| {
            let url = result
                .id
                .video_id
                .map(|id| format!("https://www.youtube.com/watch?v={}", id));
            PlatformItem::from_parts(
                result.snippet.title.as_deref(),
                result.snippet.description.as_deref(),
                result.snippet.thumbnails.medium.url.as_deref(),
                url.as_deref(),
            )
        })
        .collect();

    Ok(PlatformItems::new(items))
}

#[async_trait]
impl PlatformSource for YouTubeSource {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    async fn fetch_raw(&self, topic: &Topic) -> Result<Value, SourceError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| SourceError::MissingCredential("youtube api key".to_string()))?;

        tracing::info!(topic = %topic, "Searching YouTube");

        let url = format!("{}/youtube/v3/search", self.base_url);
        let max_results = self.max_results.to_string();

        let request = self.client.get(&url).query(&[
            ("q", topic.as_str()),
            ("key", api_key.expose_secret()),
            ("part", "snippet"),
            ("maxResults", max_results.as_str()),
        ]);

        send_json(request).await
    }

    fn parse(&self, payload: Value) -> Result<PlatformItems, SourceError> {
        parse_search(payload)
    }
}
