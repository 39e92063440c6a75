//! Domain models and value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used when a provider item has no usable title
pub const NO_TITLE: &str = "No title";

/// A non-blank search topic
///
/// Every outbound search takes a `Topic`, so an empty query can never reach
/// a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    /// Parse a raw query, returning `None` when it is empty or whitespace
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Platforms the aggregator searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[serde(rename = "youtube")]
    YouTube,
    Reddit,
    Twitter,
}

impl Platform {
    /// All platforms, in prompt order
    pub const ALL: [Platform; 3] = [Platform::YouTube, Platform::Reddit, Platform::Twitter];

    /// Stable lowercase key (route segment, config section)
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Reddit => "reddit",
            Platform::Twitter => "twitter",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Reddit => "Reddit",
            Platform::Twitter => "Twitter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "youtube" => Ok(Platform::YouTube),
            "reddit" => Ok(Platform::Reddit),
            "twitter" | "x" => Ok(Platform::Twitter),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}

/// A search result normalized across providers
///
/// Every field is always present; missing provider data is defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformItem {
    pub title: String,
    pub description: String,
    /// Absolute http(s) URL or empty
    pub thumbnail: String,
    /// Absolute URL or empty
    pub url: String,
}

impl PlatformItem {
    /// Build an item from optional provider fields, applying defaults
    pub fn from_parts(
        title: Option<&str>,
        description: Option<&str>,
        thumbnail: Option<&str>,
        url: Option<&str>,
    ) -> Self {
        Self {
            title: title
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(NO_TITLE)
                .to_string(),
            description: description.unwrap_or_default().to_string(),
            thumbnail: accept_thumbnail(thumbnail),
            url: url.unwrap_or_default().to_string(),
        }
    }
}

/// Keep a thumbnail only if it is an http(s) URL
///
/// Providers use sentinel values such as Reddit's `"self"` or `"default"`.
pub fn accept_thumbnail(thumbnail: Option<&str>) -> String {
    match thumbnail {
        Some(t) if t.starts_with("http://") || t.starts_with("https://") => t.to_string(),
        _ => String::new(),
    }
}

/// Items returned by one platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformItems {
    pub items: Vec<PlatformItem>,
}

impl PlatformItems {
    pub fn new(items: Vec<PlatformItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Per-platform results of one aggregation; `None` means that source failed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedResult {
    pub youtube: Option<PlatformItems>,
    pub reddit: Option<PlatformItems>,
    pub twitter: Option<PlatformItems>,
}

impl AggregatedResult {
    pub fn get(&self, platform: Platform) -> Option<&PlatformItems> {
        match platform {
            Platform::YouTube => self.youtube.as_ref(),
            Platform::Reddit => self.reddit.as_ref(),
            Platform::Twitter => self.twitter.as_ref(),
        }
    }

    pub fn set(&mut self, platform: Platform, value: Option<PlatformItems>) {
        match platform {
            Platform::YouTube => self.youtube = value,
            Platform::Reddit => self.reddit = value,
            Platform::Twitter => self.twitter = value,
        }
    }

    /// Platforms whose source failed
    pub fn missing(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.get(*p).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

/// Output of the trends use case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsResponse {
    pub summary: String,
    pub aggregated_data: AggregatedResult,
}
