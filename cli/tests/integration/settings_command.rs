//! `heroku settings` against a throwaway settings file.

use predicates::prelude::*;

use crate::{heroku, temp_config_path};

#[test]
fn test_settings_show_defaults_when_file_missing() {
    let (_dir, path) = temp_config_path();
    heroku()
        .args(["settings", "show"])
        .env("HEROKU_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("=== Settings ({path})")))
        .stdout(predicate::str::contains("platform.host"))
        .stdout(predicate::str::contains("https://api.heroku.com"))
        .stdout(predicate::str::contains("defaults.remote"));
}

#[test]
fn test_settings_set_persists_value() {
    let (_dir, path) = temp_config_path();
    heroku()
        .args(["settings", "set", "defaults.remote", "production"])
        .env("HEROKU_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Set defaults.remote = production"));

    let saved = std::fs::read_to_string(&path).expect("settings file written");
    assert!(saved.contains("production"), "{saved}");

    let assert = heroku()
        .args(["--json", "settings", "show"])
        .env("HEROKU_CONFIG", &path)
        .assert()
        .success();
    let v: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(v["settings"]["defaults.remote"], "production");
    assert_eq!(v["path"], path.as_str());
}

#[test]
fn test_settings_set_unknown_key_fails() {
    let (_dir, path) = temp_config_path();
    heroku()
        .args(["settings", "set", "defaults.colour", "blue"])
        .env("HEROKU_CONFIG", &path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown setting: defaults.colour"));
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_settings_set_invalid_timeout_json_error() {
    let (_dir, path) = temp_config_path();
    let assert = heroku()
        .args(["--json", "settings", "set", "defaults.timeout", "forever"])
        .env("HEROKU_CONFIG", &path)
        .assert()
        .code(1);
    let v: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(v["code"], "config_invalid");
}

#[test]
fn test_env_override_shown_but_not_saved() {
    let (_dir, path) = temp_config_path();
    heroku()
        .args(["settings", "show"])
        .env("HEROKU_CONFIG", &path)
        .env("HEROKU_HOST", "example.test")
        .assert()
        .success()
        .stdout(predicate::str::contains("example.test"));
    assert!(!std::path::Path::new(&path).exists());
}
