//! Reddit search adapter

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use trendscope_domain::{Platform, PlatformItem, PlatformItems, PlatformSource, SourceError, Topic};

use crate::http::send_json;

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";
pub const DEFAULT_USER_AGENT: &str = "trendscope/0.1 (topic aggregation dashboard)";
pub const DEFAULT_LIMIT: u32 = 5;

/// Reddit public search (`/search.json`)
pub struct RedditSource {
    client: Client,
    base_url: String,
    user_agent: String,
    limit: u32,
}

impl RedditSource {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Reddit rejects generic clients; identify ourselves explicitly
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[derive(Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Deserialize)]
struct Child {
    #[serde(default)]
    data: Option<Post>,
}

#[derive(Deserialize, Default)]
struct Post {
    title: Option<String>,
    selftext: Option<String>,
    // Reddit sends sentinels like "self" or "nsfw"; anything non-string is ignored too
    #[serde(default, deserialize_with = "lenient_string")]
    thumbnail: Option<String>,
    url: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

/// Map a Reddit listing into normalized items
pub fn parse_listing(payload: Value) -> Result<PlatformItems, SourceError> {
    let listing: Listing = serde_json::from_value(payload)
        .map_err(|e| SourceError::Shape(format!("reddit listing: {}", e)))?;

    let items = listing
        .data
        .children
        .into_iter()
        .map(|child| {
            let post = child.data.unwrap_or_default();
            PlatformItem::from_parts(
                post.title.as_deref(),
                post.selftext.as_deref(),
                post.thumbnail.as_deref(),
                post.url.as_deref(),
            )
        })
        .collect();

    Ok(PlatformItems::new(items))
}

#[async_trait]
impl PlatformSource for RedditSource {
    fn platform(&self) -> Platform {
        Platform::Reddit
    }

    async fn fetch_raw(&self, topic: &Topic) -> Result<Value, SourceError> {
        tracing::info!(topic = %topic, "Searching Reddit");

        let url = format!("{}/search.json", self.base_url);
        let limit = self.limit.to_string();

        let request = self
            .client
            .get(&url)
            .query(&[
                ("q", topic.as_str()),
                ("sort", "relevance"),
                ("limit", limit.as_str()),
            ])
            .header(reqwest::header::USER_AGENT, &self.user_agent);

        send_json(request).await
    }

    fn parse(&self, payload: Value) -> Result<PlatformItems, SourceError> {
        parse_listing(payload)
    }
}
