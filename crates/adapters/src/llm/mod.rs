//! Generative-language summarizer adapters

pub mod gemini;
pub mod stub;

pub use gemini::GeminiSummarizer;
pub use stub::StubSummarizer;

use serde::{Deserialize, Serialize};

/// Generation parameters shared by summarizer providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Model name/ID
    pub model: String,
    /// Maximum output tokens
    pub max_output_tokens: u32,
    /// Sampling temperature
    pub temperature: f64,
    /// Nucleus sampling cutoff
    pub top_p: f64,
    /// Top-k sampling cutoff
    pub top_k: u32,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash-8b-exp-0827".to_string(),
            max_output_tokens: 500,
            temperature: 1.0,
            top_p: 0.95,
            top_k: 40,
        }
    }
}
