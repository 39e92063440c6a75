use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Nothing listens on the discard port, so every source fails fast
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn offline_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("trendscope");
    cmd.current_dir(dir.path())
        .env("TRENDSCOPE__SUMMARIZER__PROVIDER", "stub")
        .env("TRENDSCOPE__REDDIT__BASE_URL", UNREACHABLE)
        .env("TRENDSCOPE__TWITTER__BASE_URL", UNREACHABLE)
        .env("TRENDSCOPE__YOUTUBE__BASE_URL", UNREACHABLE)
        .env("TWITTER_BEARER_TOKEN", "test-token")
        .env("YOUTUBE_API_KEY", "test-key")
        .env_remove("GEMINI_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn config_init_writes_example_file() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("config.toml");

    let mut cmd = cargo_bin_cmd!("trendscope");
    cmd.args(["config", "init", "--path"])
        .arg(&config_path)
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).expect("read config");
    assert!(content.contains("[summarizer]"));
    assert!(content.contains("bearer_token_env = \"TWITTER_BEARER_TOKEN\""));
}

#[test]
fn config_init_refuses_overwrite() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "# mine\n").expect("write config");

    let mut cmd = cargo_bin_cmd!("trendscope");
    cmd.args(["config", "init", "--path"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read_to_string(&config_path).unwrap(), "# mine\n");
}

#[test]
fn trends_rejects_blank_topic() {
    let dir = TempDir::new().expect("temp dir");

    offline_cmd(&dir)
        .args(["trends", "--topic", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No topic provided"));
}

#[test]
fn trends_survives_all_sources_failing() {
    let dir = TempDir::new().expect("temp dir");

    let output = offline_cmd(&dir)
        .args(["trends", "--topic", "rust", "--json"])
        .output()
        .expect("run trends");

    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert!(value["aggregatedData"]["youtube"].is_null());
    assert!(value["aggregatedData"]["reddit"].is_null());
    assert!(value["aggregatedData"]["twitter"].is_null());

    // the stub summarizer echoes the prompt
    let summary = value["summary"].as_str().expect("summary string");
    assert!(summary.contains("generate comprehensive content on the topic \"rust\""));
    assert!(summary.contains("**Reddit:** No data available"));
}

#[test]
fn search_rejects_unknown_platform() {
    let dir = TempDir::new().expect("temp dir");

    offline_cmd(&dir)
        .args(["search", "mastodon", "rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown platform"));
}

#[test]
fn doctor_reports_missing_credentials_as_warnings() {
    let dir = TempDir::new().expect("temp dir");

    let output = offline_cmd(&dir)
        .env_remove("YOUTUBE_API_KEY")
        .args(["doctor", "--json"])
        .output()
        .expect("run doctor");

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert!(predicate::str::contains("test-token").not().eval(&stdout));

    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["overall"], "warn");
    assert_eq!(value["twitter"]["status"], "ok");
    assert_eq!(value["youtube"]["status"], "warn");
    assert_eq!(value["summarizer"]["status"], "ok");
}
