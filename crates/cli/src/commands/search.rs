//! Search command - one-shot search on a single platform

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::PathBuf;
use trendscope_domain::{PlatformSource, SourceError, Topic};

use crate::args::SearchArgs;
use crate::commands::build_sources;
use crate::config::AppConfig;

pub async fn execute(args: SearchArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    let client = Client::new();
    let sources = build_sources(&config, &client);
    let source = sources.get(args.platform);

    let output = if args.raw {
        let topic = Topic::parse(&args.query).ok_or(SourceError::MissingQuery)?;
        source.fetch_raw(&topic).await?
    } else {
        serde_json::to_value(source.search(&args.query).await?)?
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
    println!("{}", json);

    Ok(())
}
