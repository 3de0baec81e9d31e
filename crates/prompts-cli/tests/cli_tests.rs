//! Tests for the `prompts` binary's offline commands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn prompts() -> Command {
    let mut cmd = Command::cargo_bin("prompts").unwrap();
    cmd.env_remove("PROMPTS_HOST")
        .env_remove("PROMPTS_PORT")
        .env_remove("PROMPTS_STATIC_DIR")
        .env_remove("PROMPTS_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn robots_prints_policy() {
    prompts()
        .arg("robots")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("User-agent: *\nAllow: /\n"))
        .stdout(predicate::str::contains("Disallow: /dashboard/\n"))
        .stdout(predicate::str::ends_with(
            "Sitemap: https://promptsforeveryone.com/sitemap.xml\n",
        ));
}

#[test]
fn robots_json() {
    let output = prompts().args(["robots", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["user_agent"], "*");
    assert_eq!(
        value["disallowed_path_patterns"],
        serde_json::json!(["/api/", "/dashboard/", "/admin/", "/private/"])
    );
}

#[test]
fn config_show_reflects_file_and_env() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("prompts.toml");
    fs::write(&path, "[web]\nport = 4100\n").unwrap();

    prompts()
        .env("PROMPTS_HOST", "0.0.0.0")
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 4100"))
        .stdout(predicate::str::contains("host = \"0.0.0.0\""));
}

#[test]
fn invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("prompts.toml");
    fs::write(&path, "[web]\nport = 0\n").unwrap();

    prompts()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("web.port"));
}
