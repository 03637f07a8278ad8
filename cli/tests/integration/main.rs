//! Integration tests: run the `heroku` binary end to end.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod lifecycle_flow;
mod settings_command;

#[path = "../support/stub_platform.rs"]
mod stub_platform;

use assert_cmd::Command;
use tempfile::TempDir;

/// The binary with colour off and no ambient app or platform settings.
pub fn heroku() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("heroku"));
    cmd.env("NO_COLOR", "1")
        .env_remove("HEROKU_APP")
        .env_remove("HEROKU_API_URL")
        .env_remove("HEROKU_HOST")
        .env_remove("HEROKU_API_KEY")
        .env_remove("HEROKU_YES")
        .env_remove("CI");
    cmd
}

/// A settings file location inside a fresh temp dir.
pub fn temp_config_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.yaml").to_string_lossy().into_owned();
    (dir, path)
}
