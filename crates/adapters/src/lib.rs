//! trendscope adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `reddit`, `twitter`, `youtube`: platform search adapters
//! - `llm`: summarizer adapters (Gemini, stub)
//! - `stub`: canned platform source for tests

mod http;
mod stub;

pub mod llm;
pub mod reddit;
pub mod twitter;
pub mod youtube;

pub use reddit::RedditSource;
pub use stub::StubSource;
pub use twitter::TwitterSource;
pub use youtube::YouTubeSource;

use serde_json::Value;
use trendscope_domain::{Platform, PlatformItems, SourceError};

/// Normalize a provider payload with the parser for its platform
pub fn parse_payload(platform: Platform, payload: Value) -> Result<PlatformItems, SourceError> {
    match platform {
        Platform::Reddit => reddit::parse_listing(payload),
        Platform::Twitter => twitter::parse_search(payload),
        Platform::YouTube => youtube::parse_search(payload),
    }
}
