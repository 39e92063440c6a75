//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use trendscope_domain::Platform;

/// trendscope: aggregate Reddit, Twitter and YouTube results for a topic and summarize them
#[derive(Parser, Debug)]
#[command(name = "trendscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the JSON HTTP API
    Serve(ServeArgs),

    /// One-shot aggregation and summary for a topic
    Trends(TrendsArgs),

    /// One-shot search on a single platform
    Search(SearchArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Validate configuration and show status
    Doctor(DoctorArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the bind port
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct TrendsArgs {
    /// Topic to aggregate
    #[arg(long, short)]
    pub topic: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Platform to search (reddit, twitter, youtube)
    pub platform: Platform,

    /// Search query
    pub query: String,

    /// Print the provider payload without normalization
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./config.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
