//! Trends use case: fan out to every source, merge, and summarize

use std::sync::Arc;

use thiserror::Error;

use crate::{
    model::{AggregatedResult, Platform, PlatformItems, Topic, TrendsResponse},
    ports::{PlatformSource, SourceError, SummarizeError, Summarizer},
    usecases::{
        prompt::build_trends_prompt,
        settle::{Settled, settle_all},
    },
};

/// Error type for the trends use case
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrendsError {
    #[error("No topic provided")]
    MissingTopic,
    #[error("Summarization failed: {0}")]
    Summarize(#[from] SummarizeError),
}

/// One source per platform
#[derive(Clone)]
pub struct PlatformSources {
    pub youtube: Arc<dyn PlatformSource>,
    pub reddit: Arc<dyn PlatformSource>,
    pub twitter: Arc<dyn PlatformSource>,
}

impl PlatformSources {
    pub fn get(&self, platform: Platform) -> &Arc<dyn PlatformSource> {
        match platform {
            Platform::YouTube => &self.youtube,
            Platform::Reddit => &self.reddit,
            Platform::Twitter => &self.twitter,
        }
    }
}

/// Use case for aggregating and summarizing a topic
pub struct TrendsUseCase {
    sources: PlatformSources,
    summarizer: Arc<dyn Summarizer>,
}

impl TrendsUseCase {
    pub fn new(sources: PlatformSources, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            sources,
            summarizer,
        }
    }

    /// Search every platform concurrently; failed sources become `None`
    pub async fn aggregate(&self, topic: &Topic) -> AggregatedResult {
        let outcomes = settle_all(
            Platform::ALL
                .iter()
                .map(|platform| self.sources.get(*platform).search(topic.as_str())),
        )
        .await;

        let mut result = AggregatedResult::default();
        for (platform, outcome) in Platform::ALL.into_iter().zip(outcomes) {
            result.set(platform, classify_outcome(platform, outcome));
        }

        tracing::info!(
            topic = %topic,
            missing = ?result.missing(),
            "Aggregated platform results"
        );

        result
    }

    /// Aggregate, build the prompt, and summarize
    pub async fn run(&self, raw_topic: &str) -> Result<TrendsResponse, TrendsError> {
        let topic = Topic::parse(raw_topic).ok_or(TrendsError::MissingTopic)?;

        let aggregated_data = self.aggregate(&topic).await;
        let prompt = build_trends_prompt(&topic, &aggregated_data);

        tracing::debug!(topic = %topic, prompt_len = prompt.len(), "Requesting summary");

        let summary = self.summarizer.summarize(&prompt).await?;

        Ok(TrendsResponse {
            summary,
            aggregated_data,
        })
    }
}

fn classify_outcome(
    platform: Platform,
    outcome: Settled<PlatformItems, SourceError>,
) -> Option<PlatformItems> {
    match outcome {
        Settled::Fulfilled(items) => Some(items),
        Settled::Rejected(error) => {
            tracing::warn!(platform = %platform, error = %error, "Source failed, continuing without it");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlatformItem;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeSource {
        platform: Platform,
        response: Result<Value, SourceError>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn ok(platform: Platform, title: &str) -> Arc<Self> {
            Arc::new(Self {
                platform,
                response: Ok(json!({"items": [{
                    "title": title,
                    "description": "",
                    "thumbnail": "",
                    "url": "https://example.com"
                }]})),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(platform: Platform) -> Arc<Self> {
            Arc::new(Self {
                platform,
                response: Err(SourceError::Network("connection refused".to_string())),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PlatformSource for FakeSource {
        fn platform(&self) -> Platform {
            self.platform
        }

        async fn fetch_raw(&self, _topic: &Topic) -> Result<Value, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }

        fn parse(&self, payload: Value) -> Result<PlatformItems, SourceError> {
            serde_json::from_value(payload).map_err(|e| SourceError::Shape(e.to_string()))
        }
    }

    #[derive(Default)]
    struct FakeSummarizer {
        prompts: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Summarizer for FakeSummarizer {
        async fn summarize(&self, prompt: &str) -> Result<String, SummarizeError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                Err(SummarizeError::Api {
                    status: 500,
                    message: "upstream".to_string(),
                })
            } else {
                Ok("summary".to_string())
            }
        }
    }

    fn usecase(
        youtube: Arc<FakeSource>,
        reddit: Arc<FakeSource>,
        twitter: Arc<FakeSource>,
        summarizer: Arc<FakeSummarizer>,
    ) -> TrendsUseCase {
        TrendsUseCase::new(
            PlatformSources {
                youtube,
                reddit,
                twitter,
            },
            summarizer,
        )
    }

    #[tokio::test]
    async fn test_all_sources_succeed() {
        let summarizer = Arc::new(FakeSummarizer::default());
        let usecase = usecase(
            FakeSource::ok(Platform::YouTube, "video"),
            FakeSource::ok(Platform::Reddit, "post"),
            FakeSource::ok(Platform::Twitter, "tweet"),
            summarizer.clone(),
        );

        let response = usecase.run("ai").await.unwrap();

        assert_eq!(response.summary, "summary");
        assert!(response.aggregated_data.is_complete());
        assert_eq!(
            response.aggregated_data.reddit.unwrap().items[0],
            PlatformItem::from_parts(Some("post"), None, None, Some("https://example.com"))
        );
        let prompts = summarizer.prompts.lock().unwrap();
        assert!(!prompts[0].contains("generate comprehensive content"));
    }

    #[tokio::test]
    async fn test_one_failed_source_is_null() {
        let summarizer = Arc::new(FakeSummarizer::default());
        let usecase = usecase(
            FakeSource::ok(Platform::YouTube, "video"),
            FakeSource::failing(Platform::Reddit),
            FakeSource::ok(Platform::Twitter, "tweet"),
            summarizer.clone(),
        );

        let response = usecase.run("ai").await.unwrap();

        assert_eq!(response.aggregated_data.missing(), vec![Platform::Reddit]);
        assert!(response.aggregated_data.youtube.is_some());
        assert!(response.aggregated_data.twitter.is_some());
        let prompts = summarizer.prompts.lock().unwrap();
        assert!(prompts[0].contains("**Reddit:** No data available"));
        assert!(prompts[0].contains("generate comprehensive content"));
    }

    #[tokio::test]
    async fn test_all_sources_fail_still_summarizes() {
        let summarizer = Arc::new(FakeSummarizer::default());
        let usecase = usecase(
            FakeSource::failing(Platform::YouTube),
            FakeSource::failing(Platform::Reddit),
            FakeSource::failing(Platform::Twitter),
            summarizer.clone(),
        );

        let response = usecase.run("ai").await.unwrap();

        assert_eq!(response.aggregated_data, AggregatedResult::default());
        let prompts = summarizer.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("generate comprehensive content"));
    }

    #[tokio::test]
    async fn test_summarizer_failure_fails_request() {
        let summarizer = Arc::new(FakeSummarizer {
            fail: true,
            ..Default::default()
        });
        let usecase = usecase(
            FakeSource::ok(Platform::YouTube, "video"),
            FakeSource::ok(Platform::Reddit, "post"),
            FakeSource::ok(Platform::Twitter, "tweet"),
            summarizer,
        );

        let result = usecase.run("ai").await;

        assert!(matches!(result, Err(TrendsError::Summarize(_))));
    }

    #[tokio::test]
    async fn test_blank_topic_makes_no_calls() {
        let youtube = FakeSource::ok(Platform::YouTube, "video");
        let reddit = FakeSource::ok(Platform::Reddit, "post");
        let twitter = FakeSource::ok(Platform::Twitter, "tweet");
        let summarizer = Arc::new(FakeSummarizer::default());
        let usecase = usecase(
            youtube.clone(),
            reddit.clone(),
            twitter.clone(),
            summarizer.clone(),
        );

        let result = usecase.run("  ").await;

        assert_eq!(result, Err(TrendsError::MissingTopic));
        assert_eq!(youtube.calls() + reddit.calls() + twitter.calls(), 0);
        assert!(summarizer.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let usecase = usecase(
            FakeSource::ok(Platform::YouTube, "video"),
            FakeSource::failing(Platform::Reddit),
            FakeSource::ok(Platform::Twitter, "tweet"),
            Arc::new(FakeSummarizer::default()),
        );

        let first = serde_json::to_vec(&usecase.run("ai").await.unwrap()).unwrap();
        let second = serde_json::to_vec(&usecase.run("ai").await.unwrap()).unwrap();

        assert_eq!(first, second);
    }
}
