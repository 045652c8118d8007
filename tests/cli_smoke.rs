#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every test points the config and cache directories at a fresh temporary
//! directory, so no user configuration leaks in and no network is needed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn mixtl(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mixtl").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env("NO_COLOR", "1")
        .env_remove("MIXTL_LOG");
    cmd
}

fn write_config(home: &TempDir, contents: &str) {
    let dir = home.path().join("config").join("mixtl");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    mixtl(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Translate mixed-language"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("detect"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    mixtl(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    mixtl(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indian languages"))
        .stdout(predicate::str::contains("Kannada"))
        .stdout(predicate::str::contains("Japanese"));
}

#[test]
fn test_languages_indian_only() {
    let home = TempDir::new().unwrap();
    mixtl(&home)
        .args(["languages", "--indian"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marathi"))
        .stdout(predicate::str::contains("Japanese").not());
}

#[test]
fn test_languages_include_config_extras() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[languages]\nxbh = \"Test Bhojpuri\"\n");

    mixtl(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Bhojpuri"));
}

#[test]
fn test_providers_list_without_config() {
    let home = TempDir::new().unwrap();
    mixtl(&home)
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("No providers configured"));
}

#[test]
fn test_invalid_language_code() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        r#"
[mixtl]
provider = "local"
model = "m"

[providers.local]
endpoint = "http://127.0.0.1:9"
"#,
    );

    mixtl(&home)
        .args(["--to", "invalid_lang_xyz"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language code"));
}

#[test]
fn test_translate_without_provider_names_both_sources() {
    let home = TempDir::new().unwrap();
    mixtl(&home)
        .args(["--to", "hi", "namaste"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'provider'"))
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn test_missing_api_key_is_reported() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        r#"
[mixtl]
provider = "remote"
model = "m"
to = "hi"

[providers.remote]
endpoint = "https://api.example.com"
api_key_env = "MIXTL_SMOKE_UNSET_KEY"
"#,
    );

    mixtl(&home)
        .env_remove("MIXTL_SMOKE_UNSET_KEY")
        .arg("namaste")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires an API key"));
}

#[test]
fn test_unreachable_backend_reports_in_band_error() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        r#"
[mixtl]
provider = "local"
model = "m"

[providers.local]
endpoint = "http://127.0.0.1:9"
"#,
    );

    mixtl(&home)
        .args(["--to", "en", "--no-transliteration", "-n", "namaste aap kaise ho"])
        .assert()
        .failure()
        .code(69)
        .stderr(predicate::str::contains("Error: Network error"));
}

#[test]
fn test_detect_json_without_provider() {
    let home = TempDir::new().unwrap();
    let output = mixtl(&home)
        .args(["detect", "--json", "Hello world namaste aap kaise ho"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["is_mixed"], true);
    assert_eq!(report["count"], 2);
    assert_eq!(report["languages"][0]["code"], "en");
    assert_eq!(report["languages"][1]["name"], "Hindi");
    assert_eq!(report["romanized"], true);
    assert_eq!(report["segments"][1]["text"], "namaste aap kaise ho");
    assert_eq!(report["segments"][1]["lang"], "hi");
}

#[test]
fn test_detect_from_stdin_without_evidence_defaults_to_english() {
    let home = TempDir::new().unwrap();
    mixtl(&home)
        .arg("detect")
        .write_stdin("buongiorno amico")
        .assert()
        .success()
        .stdout(predicate::str::contains("Single language"))
        .stdout(predicate::str::contains("English"));
}

#[test]
fn test_detect_empty_input_fails() {
    let home = TempDir::new().unwrap();
    mixtl(&home)
        .arg("detect")
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input is empty"));
}

#[test]
fn test_oversized_stdin_error_has_single_prefix() {
    let home = TempDir::new().unwrap();
    mixtl(&home)
        .arg("detect")
        .write_stdin("x".repeat(1024 * 1024 + 1))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Input size"))
        .stderr(predicate::str::contains("Error: Error:").not());
}
