use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".kitchen-dashboard").join("config.json")
}

const BINARY_NAME: &str = "kitchen-dashboard";

/// Command isolated from the caller's home directory and environment.
fn dashboard_cmd(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()) // simulate different $HOME
        .env_remove("KITCHEN_ENVIRONMENT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"))
        .stdout(contains("set-backend"))
        .stdout(contains("run"));
}

#[test]
/// Reset command should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    assert!(config_path.exists());

    dashboard_cmd(&tmp)
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("Resetting"));

    assert!(!config_path.exists());
}

#[test]
fn set_backend_writes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);

    dashboard_cmd(&tmp)
        .arg("set-backend")
        .arg("http://pantry.local:8000/")
        .assert()
        .success()
        .stdout(contains("Backend saved"));

    let saved: serde_json::Value =
        serde_json::from_slice(&fs::read(&config_path).unwrap()).unwrap();
    assert_eq!(saved["backend_url"], "http://pantry.local:8000");
}

#[test]
fn set_backend_local_clears_saved_url() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"backend_url":"http://old.local:8000"}"#).unwrap();

    dashboard_cmd(&tmp)
        .args(["set-backend", "local"])
        .assert()
        .success()
        .stdout(contains("http://localhost:8000"));

    let saved: serde_json::Value =
        serde_json::from_slice(&fs::read(&config_path).unwrap()).unwrap();
    assert!(saved["backend_url"].is_null());
}

#[test]
fn set_backend_rejects_non_http_url() {
    let tmp = temp_home_dir();

    dashboard_cmd(&tmp)
        .arg("set-backend")
        .arg("ftp://pantry.local")
        .assert()
        .failure()
        .stderr(contains("Invalid backend"));

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Upload actions refuse to run without an image.
fn run_detect_without_image_fails() {
    let tmp = temp_home_dir();

    dashboard_cmd(&tmp)
        .args(["run", "detect", "--backend-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(contains("--image"));
}

#[test]
fn run_rejects_unknown_action() {
    let tmp = temp_home_dir();

    dashboard_cmd(&tmp)
        .args(["run", "bake"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[tokio::test(flavor = "multi_thread")]
async fn run_recipes_prints_card() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(["Shakshuka", "Minestrone"]))
        .expect(1)
        .mount(&server)
        .await;
    let tmp = temp_home_dir();

    dashboard_cmd(&tmp)
        .args(["run", "recipes", "--backend-url", &server.uri()])
        .assert()
        .success()
        .stdout(contains("AI Recipe Suggestions"))
        .stdout(contains("  • Shakshuka"))
        .stdout(contains("  • Minestrone"));
}

#[tokio::test(flavor = "multi_thread")]
async fn run_uses_saved_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/spoilage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"spoiled": true})))
        .expect(1)
        .mount(&server)
        .await;
    let tmp = temp_home_dir();
    let image = tmp.path().join("lettuce.jpg");
    fs::write(&image, [0xFFu8, 0xD8, 0xFF]).unwrap();

    dashboard_cmd(&tmp)
        .args(["set-backend", &server.uri()])
        .assert()
        .success();

    dashboard_cmd(&tmp)
        .args(["run", "spoilage", "--image"])
        .arg(&image)
        .assert()
        .success()
        .stdout(contains("Spoiled items detected."));
}

#[tokio::test(flavor = "multi_thread")]
async fn run_forecast_failure_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not trained"))
        .mount(&server)
        .await;
    let tmp = temp_home_dir();

    dashboard_cmd(&tmp)
        .args(["run", "forecast", "--backend-url", &server.uri()])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Failed to load forecast data").count(1))
        .stderr(contains("Error: ").not());
}
