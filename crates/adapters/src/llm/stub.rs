//! Stub summarizer for testing and offline mode

use async_trait::async_trait;
use std::sync::Mutex;
use trendscope_domain::{SummarizeError, Summarizer};

enum Behavior {
    Fixed(String),
    Echo,
    Fail(SummarizeError),
}

/// Stub summarizer that returns configurable responses and records prompts
pub struct StubSummarizer {
    behavior: Behavior,
    prompts: Mutex<Vec<String>>,
}

impl StubSummarizer {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(vec![]),
        }
    }

    /// Always return the given summary
    pub fn with_summary(summary: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Fixed(summary.into()))
    }

    /// Return the prompt itself as the summary
    pub fn echo() -> Self {
        Self::with_behavior(Behavior::Echo)
    }

    /// Always fail with the given error
    pub fn with_error(error: SummarizeError) -> Self {
        Self::with_behavior(Behavior::Fail(error))
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for StubSummarizer {
    fn default() -> Self {
        Self::with_summary("Stub summary")
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizeError> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.to_string());

        match &self.behavior {
            Behavior::Fixed(summary) => Ok(summary.clone()),
            Behavior::Echo => Ok(prompt.to_string()),
            Behavior::Fail(error) => Err(error.clone()),
        }
    }
}
