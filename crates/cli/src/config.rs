//! Configuration loading and management

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub reddit: RedditConfig,

    #[serde(default)]
    pub twitter: TwitterConfig,

    #[serde(default)]
    pub youtube: YouTubeConfig,

    #[serde(default)]
    pub summarizer: SummarizerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditConfig {
    #[serde(default = "default_reddit_base_url")]
    pub base_url: String,

    #[serde(default = "default_reddit_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_reddit_limit")]
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterConfig {
    #[serde(default = "default_twitter_base_url")]
    pub base_url: String,

    #[serde(default = "default_twitter_bearer_token_env")]
    pub bearer_token_env: String,

    #[serde(default = "default_twitter_max_results")]
    pub max_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeConfig {
    #[serde(default = "default_youtube_base_url")]
    pub base_url: String,

    #[serde(default = "default_youtube_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_youtube_max_results")]
    pub max_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Env var that overrides `model` when set
    #[serde(default = "default_model_env")]
    pub model_env: String,

    #[serde(default = "default_gemini_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_top_p")]
    pub top_p: f64,

    #[serde(default = "default_top_k")]
    pub top_k: u32,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_reddit_base_url() -> String {
    trendscope_adapters::reddit::DEFAULT_BASE_URL.to_string()
}

fn default_reddit_user_agent() -> String {
    trendscope_adapters::reddit::DEFAULT_USER_AGENT.to_string()
}

fn default_reddit_limit() -> u32 {
    trendscope_adapters::reddit::DEFAULT_LIMIT
}

fn default_twitter_base_url() -> String {
    trendscope_adapters::twitter::DEFAULT_BASE_URL.to_string()
}

fn default_twitter_bearer_token_env() -> String {
    "TWITTER_BEARER_TOKEN".to_string()
}

fn default_twitter_max_results() -> u32 {
    trendscope_adapters::twitter::DEFAULT_MAX_RESULTS
}

fn default_youtube_base_url() -> String {
    trendscope_adapters::youtube::DEFAULT_BASE_URL.to_string()
}

fn default_youtube_api_key_env() -> String {
    "YOUTUBE_API_KEY".to_string()
}

fn default_youtube_max_results() -> u32 {
    trendscope_adapters::youtube::DEFAULT_MAX_RESULTS
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    trendscope_adapters::llm::SummarizerConfig::default().model
}

fn default_model_env() -> String {
    "GEMINI_MODEL".to_string()
}

fn default_gemini_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_gemini_base_url() -> String {
    trendscope_adapters::llm::gemini::DEFAULT_BASE_URL.to_string()
}

fn default_max_output_tokens() -> u32 {
    500
}

fn default_temperature() -> f64 {
    1.0
}

fn default_top_p() -> f64 {
    0.95
}

fn default_top_k() -> u32 {
    40
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            base_url: default_reddit_base_url(),
            user_agent: default_reddit_user_agent(),
            limit: default_reddit_limit(),
        }
    }
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            base_url: default_twitter_base_url(),
            bearer_token_env: default_twitter_bearer_token_env(),
            max_results: default_twitter_max_results(),
        }
    }
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            base_url: default_youtube_base_url(),
            api_key_env: default_youtube_api_key_env(),
            max_results: default_youtube_max_results(),
        }
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            model_env: default_model_env(),
            api_key_env: default_gemini_api_key_env(),
            base_url: default_gemini_base_url(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
        }
    }
}

impl SummarizerConfig {
    /// Configured model, unless the model env var names another
    pub fn resolved_model(&self) -> String {
        env_value(&self.model_env).unwrap_or_else(|| self.model.clone())
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("TRENDSCOPE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# trendscope configuration
#
# Every key can be overridden with TRENDSCOPE__<SECTION>__<KEY>,
# e.g. TRENDSCOPE__SERVER__PORT=8080

[server]
host = "127.0.0.1"
port = 3000

[reddit]
base_url = "https://www.reddit.com"
user_agent = "trendscope/0.1 (topic aggregation dashboard)"
limit = 5

[twitter]
base_url = "https://api.twitter.com"
bearer_token_env = "TWITTER_BEARER_TOKEN"
max_results = 11

[youtube]
base_url = "https://www.googleapis.com"
api_key_env = "YOUTUBE_API_KEY"
max_results = 5

[summarizer]
provider = "gemini"  # gemini, stub
model = "gemini-1.5-flash-8b-exp-0827"
model_env = "GEMINI_MODEL"
api_key_env = "GEMINI_API_KEY"
base_url = "https://generativelanguage.googleapis.com"
max_output_tokens = 500
temperature = 1.0
top_p = 0.95
top_k = 40
"#
        .to_string()
    }
}

/// Non-empty, trimmed value of an env var
fn env_value(env_var: &str) -> Option<String> {
    if env_var.trim().is_empty() {
        return None;
    }
    std::env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a credential from the named env var
///
/// Absence is not an error here; the adapter reports it when it is called.
pub fn load_credential(env_var: &str, provider: &str) -> Option<SecretString> {
    match env_value(env_var) {
        Some(value) => Some(SecretString::new(value.into())),
        None => {
            tracing::warn!(
                provider = provider,
                env_var = env_var,
                "Credential not set; requests to this provider will fail"
            );
            None
        }
    }
}
