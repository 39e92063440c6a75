//! Trends command - one-shot aggregation and summary

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::PathBuf;
use trendscope_domain::{Platform, TrendsResponse, usecases::TrendsUseCase};

use crate::args::TrendsArgs;
use crate::commands::{build_sources, build_summarizer};
use crate::config::AppConfig;

pub async fn execute(args: TrendsArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    let client = Client::new();
    let usecase = TrendsUseCase::new(
        build_sources(&config, &client),
        build_summarizer(&config, &client)?,
    );

    let response = usecase.run(&args.topic).await?;

    if args.json {
        let json = serde_json::to_string_pretty(&response).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        print_response(&args.topic, &response);
    }

    Ok(())
}

fn print_response(topic: &str, response: &TrendsResponse) {
    println!("Trends: {}", topic.trim());
    println!("==========");
    println!();

    for platform in Platform::ALL {
        match response.aggregated_data.get(platform) {
            Some(items) if items.is_empty() => {
                println!("{}: no results", platform.display_name());
            }
            Some(items) => {
                println!("{}:", platform.display_name());
                for item in &items.items {
                    println!("  - {}", item.title);
                    if !item.url.is_empty() {
                        println!("    {}", item.url);
                    }
                }
            }
            None => println!("{}: unavailable", platform.display_name()),
        }
        println!();
    }

    println!("Summary");
    println!("-------");
    println!("{}", response.summary);
}
