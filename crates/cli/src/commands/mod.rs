//! Subcommand implementations and shared wiring

pub mod config;
pub mod doctor;
pub mod search;
pub mod serve;
pub mod trends;

use anyhow::{Result, bail};
use reqwest::Client;
use std::sync::Arc;
use trendscope_adapters::{
    RedditSource, TwitterSource, YouTubeSource,
    llm::{GeminiSummarizer, StubSummarizer, SummarizerConfig as AdapterSummarizerConfig},
};
use trendscope_domain::{Summarizer, usecases::PlatformSources};

use crate::config::{AppConfig, load_credential};

/// Build one source per platform, sharing a single HTTP client
pub(crate) fn build_sources(config: &AppConfig, client: &Client) -> PlatformSources {
    let reddit = RedditSource::with_base_url(client.clone(), config.reddit.base_url.clone())
        .user_agent(config.reddit.user_agent.clone())
        .limit(config.reddit.limit);

    let twitter = TwitterSource::with_base_url(
        client.clone(),
        load_credential(&config.twitter.bearer_token_env, "twitter"),
        config.twitter.base_url.clone(),
    )
    .max_results(config.twitter.max_results);

    let youtube = YouTubeSource::with_base_url(
        client.clone(),
        load_credential(&config.youtube.api_key_env, "youtube"),
        config.youtube.base_url.clone(),
    )
    .max_results(config.youtube.max_results);

    PlatformSources {
        youtube: Arc::new(youtube),
        reddit: Arc::new(reddit),
        twitter: Arc::new(twitter),
    }
}

pub(crate) fn build_summarizer(config: &AppConfig, client: &Client) -> Result<Arc<dyn Summarizer>> {
    let summarizer = &config.summarizer;

    match summarizer.provider.as_str() {
        "gemini" => {
            let adapter_config = AdapterSummarizerConfig {
                model: summarizer.resolved_model(),
                max_output_tokens: summarizer.max_output_tokens,
                temperature: summarizer.temperature,
                top_p: summarizer.top_p,
                top_k: summarizer.top_k,
            };
            Ok(Arc::new(GeminiSummarizer::with_base_url(
                client.clone(),
                load_credential(&summarizer.api_key_env, "gemini"),
                summarizer.base_url.clone(),
                adapter_config,
            )))
        }
        "stub" => Ok(Arc::new(StubSummarizer::echo())),
        other => bail!("Unknown summarizer provider: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_summarizer_rejects_unknown_provider() {
        let mut config = AppConfig::default();
        config.summarizer.provider = "openai".to_string();

        assert!(build_summarizer(&config, &Client::new()).is_err());
    }

    #[test]
    fn test_build_summarizer_stub() {
        let mut config = AppConfig::default();
        config.summarizer.provider = "stub".to_string();

        assert!(build_summarizer(&config, &Client::new()).is_ok());
    }

    #[test]
    fn test_build_sources_without_credentials() {
        let mut config = AppConfig::default();
        config.twitter.bearer_token_env = String::new();
        config.youtube.api_key_env = String::new();

        let sources = build_sources(&config, &Client::new());

        assert_eq!(sources.twitter.platform(), trendscope_domain::Platform::Twitter);
        assert_eq!(sources.youtube.platform(), trendscope_domain::Platform::YouTube);
    }
}
