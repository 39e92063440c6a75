//! Doctor command - validate configuration and show status

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::args::DoctorArgs;
use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct DoctorReport {
    config: CheckResult,
    reddit: CheckResult,
    twitter: CheckResult,
    youtube: CheckResult,
    summarizer: CheckResult,
    overall: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    status: String,
    message: String,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            status: "warn".to_string(),
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    fn is_error(&self) -> bool {
        self.status == "error"
    }
}

pub async fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut report = DoctorReport {
        config: CheckResult::error("Not checked"),
        reddit: CheckResult::error("Not checked"),
        twitter: CheckResult::error("Not checked"),
        youtube: CheckResult::error("Not checked"),
        summarizer: CheckResult::error("Not checked"),
        overall: "error".to_string(),
    };

    match AppConfig::load(config_path.as_deref()) {
        Ok(config) => {
            report.config = CheckResult::ok("Configuration loaded successfully");
            report.reddit = check_reddit(&config);
            report.twitter = check_credential(
                "Bearer token",
                &config.twitter.bearer_token_env,
                &config.twitter.base_url,
            );
            report.youtube = check_credential(
                "API key",
                &config.youtube.api_key_env,
                &config.youtube.base_url,
            );
            report.summarizer = check_summarizer(&config);
        }
        Err(e) => {
            report.config = CheckResult::error(format!("Failed to load config: {}", e));
        }
    }

    let checks = [
        &report.config,
        &report.reddit,
        &report.twitter,
        &report.youtube,
        &report.summarizer,
    ];

    let has_error = checks.iter().any(|c| c.is_error());
    let all_ok = checks.iter().all(|c| c.is_ok());

    report.overall = if has_error {
        "error".to_string()
    } else if all_ok {
        "ok".to_string()
    } else {
        "warn".to_string()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.overall == "error" {
        std::process::exit(1);
    }

    Ok(())
}

fn check_reddit(config: &AppConfig) -> CheckResult {
    if config.reddit.user_agent.trim().is_empty() {
        return CheckResult::error("Reddit requires a descriptive user_agent");
    }

    CheckResult::ok(format!(
        "Endpoint: {}, User-Agent: {}",
        config.reddit.base_url, config.reddit.user_agent
    ))
}

/// Report whether a credential env var is set (never its value)
fn check_credential(label: &str, env_var: &str, base_url: &str) -> CheckResult {
    if env_var.trim().is_empty() {
        return CheckResult::warn(format!("No {} env var configured", label.to_lowercase()));
    }

    match std::env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => CheckResult::ok(format!(
            "{}: {} (set), Endpoint: {}",
            label, env_var, base_url
        )),
        _ => CheckResult::warn(format!(
            "{}: {} (not set), requests will fail",
            label, env_var
        )),
    }
}

fn check_summarizer(config: &AppConfig) -> CheckResult {
    let summarizer = &config.summarizer;

    match summarizer.provider.as_str() {
        "stub" => CheckResult::ok("Provider: stub (offline, echoes prompt)"),
        "gemini" => {
            let model = summarizer.resolved_model();
            match check_credential("API key", &summarizer.api_key_env, &summarizer.base_url) {
                result if result.is_ok() => {
                    CheckResult::ok(format!("Provider: gemini, Model: {}, {}", model, result.message))
                }
                result => CheckResult::warn(format!(
                    "Provider: gemini, Model: {}, {}",
                    model, result.message
                )),
            }
        }
        other => CheckResult::error(format!("Unknown provider: {}", other)),
    }
}

fn print_report(report: &DoctorReport) {
    println!("trendscope Doctor Report");
    println!("========================");
    println!();

    print_check("Config", &report.config);
    print_check("Reddit", &report.reddit);
    print_check("Twitter", &report.twitter);
    print_check("YouTube", &report.youtube);
    print_check("Summarizer", &report.summarizer);

    println!();
    let symbol = match report.overall.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} Overall: {}", symbol, report.overall.to_uppercase());

    if report.overall != "error" {
        println!();
        println!("Ready to run! Try: trendscope trends --topic rust");
    }
}

fn print_check(name: &str, result: &CheckResult) {
    let symbol = match result.status.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} {}: {}", symbol, name, result.message);
}
