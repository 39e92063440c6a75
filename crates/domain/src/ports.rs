//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external systems.
//! Adapters implement these traits to connect to real infrastructure.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::model::{Platform, PlatformItems, Topic};

/// Error type for source adapter operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("No query provided")]
    MissingQuery,
    #[error("Missing credential: {0}")]
    MissingCredential(String),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Unexpected payload shape: {0}")]
    Shape(String),
}

impl SourceError {
    /// Whether the caller supplied bad input (as opposed to an upstream failure)
    pub fn is_validation(&self) -> bool {
        matches!(self, SourceError::MissingQuery)
    }
}

/// Port for searching one third-party platform
///
/// Implementations issue exactly one outbound call in [`fetch_raw`] and keep
/// [`parse`] free of I/O, so payload handling can be tested on its own.
///
/// [`fetch_raw`]: PlatformSource::fetch_raw
/// [`parse`]: PlatformSource::parse
#[async_trait]
pub trait PlatformSource: Send + Sync {
    /// Platform served by this source
    fn platform(&self) -> Platform;

    /// Fetch the provider's unmodified search payload
    async fn fetch_raw(&self, topic: &Topic) -> Result<Value, SourceError>;

    /// Map a provider payload into normalized items
    fn parse(&self, payload: Value) -> Result<PlatformItems, SourceError>;

    /// Validate the query, fetch, and normalize
    async fn search(&self, query: &str) -> Result<PlatformItems, SourceError> {
        let topic = Topic::parse(query).ok_or(SourceError::MissingQuery)?;
        let payload = self.fetch_raw(&topic).await?;
        let items = self.parse(payload)?;

        tracing::info!(
            platform = %self.platform(),
            topic = %topic,
            count = items.len(),
            "Fetched items"
        );

        Ok(items)
    }
}

/// Error type for summarizer operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),
}

/// Port for the generative-language summarization call
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Submit a prompt and return the generated text
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizeError>;
}
