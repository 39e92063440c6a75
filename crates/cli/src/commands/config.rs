//! `trendscope config` subcommands

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::args::{ConfigArgs, ConfigCommands};
use crate::config::AppConfig;

pub async fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init { path, force } => write_example(&path, force),
    }
}

fn write_example(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to replace it",
            path.display()
        );
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    fs::write(path, AppConfig::example_toml())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    println!("Wrote {}", path.display());
    println!();
    println!("Credentials are read from the environment:");
    println!("  TWITTER_BEARER_TOKEN  Twitter v2 recent search");
    println!("  YOUTUBE_API_KEY       YouTube Data API v3");
    println!("  GEMINI_API_KEY        summarizer");
    println!();
    println!("Then: trendscope doctor && trendscope serve");

    Ok(())
}
