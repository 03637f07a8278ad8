//! End-to-end runs against an in-process stub of the platform API.

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::stub_platform::{PlatformState, RunningStub, USER};
use crate::{heroku, temp_config_path};

struct Session {
    stub: RunningStub,
    cwd: TempDir,
    _config_dir: TempDir,
    config: String,
}

impl Session {
    fn new(state: PlatformState) -> Self {
        let (config_dir, config) = temp_config_path();
        Self {
            stub: RunningStub::start(state),
            cwd: TempDir::new().expect("temp dir"),
            _config_dir: config_dir,
            config,
        }
    }

    fn heroku(&self) -> Command {
        let mut cmd = heroku();
        cmd.current_dir(self.cwd.path())
            .env("HEROKU_CONFIG", &self.config)
            .env("HEROKU_API_URL", &self.stub.url)
            .env("HEROKU_HOST", "heroku.com")
            .env("HEROKU_API_KEY", "secret")
            .env(
                "GIT_CEILING_DIRECTORIES",
                self.cwd.path().parent().unwrap_or(self.cwd.path()),
            );
        cmd
    }
}

fn git_available() -> bool {
    StdCommand::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

fn git(dir: &Path, args: &[&str]) -> String {
    let out = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git runs");
    assert!(out.status.success(), "git {args:?} failed");
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn two_apps() -> PlatformState {
    PlatformState::default()
        .with_app("myapp", USER)
        .with_app("theirapp", "other@example.com")
}

#[test]
fn test_list_marks_foreign_owners() {
    let s = Session::new(two_apps());
    s.heroku()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("myapp"))
        .stdout(predicate::str::contains("theirapp"))
        .stdout(predicate::str::contains("other@example.com"));
    assert_eq!(s.stub.requests(), ["GET /apps", "GET /account"]);
}

#[test]
fn test_requests_carry_basic_auth() {
    let s = Session::new(two_apps());
    s.heroku().arg("list").assert().success();
    let auth = s.stub.state.lock().unwrap().authorization.clone();
    assert!(auth.is_some_and(|a| a.starts_with("Basic ")));
}

#[test]
fn test_info_formatted_and_raw() {
    let s = Session::new(two_apps());
    s.heroku()
        .args(["info", "myapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== myapp"))
        .stdout(predicate::str::contains("http://myapp.heroku.com/"))
        .stdout(predicate::str::contains("git@heroku.com:myapp.git"));

    s.heroku()
        .args(["info", "myapp", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name=myapp"))
        .stdout(predicate::str::contains("stack=cedar"))
        .stdout(predicate::str::contains("web_url=http://myapp.heroku.com/"));
}

#[test]
fn test_info_unknown_app_fails() {
    let s = Session::new(two_apps());
    s.heroku()
        .args(["info", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("App not found: ghost"));
}

#[test]
fn test_info_json() {
    let s = Session::new(two_apps());
    let assert = s.heroku().args(["--json", "info", "myapp"]).assert().success();
    let v: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(v["name"], "myapp");
    assert_eq!(v["git_url"], "git@heroku.com:myapp.git");
}

#[test]
fn test_info_without_app_outside_git_fails() {
    let s = Session::new(two_apps());
    s.heroku().arg("info").assert().code(1);
    assert!(s.stub.requests().is_empty());
}

#[test]
fn test_logs_print_session_output_as_is() {
    let s = Session::new(two_apps().with_logs("myapp", "myapp[web.1]: State changed to up\n"));
    s.heroku()
        .args(["--app", "myapp", "logs"])
        .assert()
        .success()
        .stdout("myapp[web.1]: State changed to up\n");
    assert_eq!(
        s.stub.requests(),
        ["GET /apps/myapp/logs?logplex=true", "GET /logplex/myapp"]
    );
}

#[test]
fn test_logs_filters_become_query_parameters() {
    let s = Session::new(two_apps().with_logs("myapp", "line\n"));
    s.heroku()
        .args(["logs", "--app", "myapp", "-n", "10", "--ps", "web.1"])
        .assert()
        .success();
    assert_eq!(
        s.stub.requests()[0],
        "GET /apps/myapp/logs?logplex=true&num=10&ps=web.1"
    );
}

#[test]
fn test_logs_cron() {
    let s = Session::new(two_apps().with_cron_logs("myapp", "cron logs"));
    s.heroku()
        .args(["--app", "myapp", "logs", "cron"])
        .assert()
        .success()
        .stdout("cron logs\n");
    assert_eq!(s.stub.requests(), ["GET /apps/myapp/cron_logs"]);
}

#[test]
fn test_logs_json_wraps_text() {
    let s = Session::new(two_apps().with_cron_logs("myapp", "cron logs"));
    let assert = s
        .heroku()
        .args(["--json", "--app", "myapp", "logs", "cron"])
        .assert()
        .success();
    let v: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(v["logs"], "cron logs");
}

#[test]
fn test_logs_unknown_app_fails() {
    let s = Session::new(two_apps());
    s.heroku()
        .args(["--app", "ghost", "logs"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("App not found: ghost"));
}

#[test]
fn test_create_installs_addons_in_order() {
    let s = Session::new(PlatformState::default());
    s.heroku()
        .args(["create", "newapp", "--timeout", "5", "--addons", "redis, memcache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating newapp..."))
        .stdout(predicate::str::contains(
            "http://newapp.heroku.com/ | git@heroku.com:newapp.git",
        ));

    let installs: Vec<String> = s
        .stub
        .requests()
        .into_iter()
        .filter(|r| r.contains("/addons/"))
        .collect();
    assert_eq!(
        installs,
        [
            "POST /apps/newapp/addons/redis",
            "POST /apps/newapp/addons/memcache"
        ]
    );
    assert_eq!(s.stub.app_names(), ["newapp"]);
}

#[test]
fn test_create_without_name_uses_assigned_name() {
    let s = Session::new(PlatformState::default());
    s.heroku()
        .arg("create")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating generated-app-1..."));
}

#[test]
fn test_create_taken_name_reports_platform_message() {
    let s = Session::new(two_apps());
    s.heroku()
        .args(["create", "myapp"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Name is already taken"));
}

#[test]
fn test_create_timeout_skips_addons() {
    let s = Session::new(PlatformState {
        create_pending: 100,
        ..PlatformState::default()
    });
    s.heroku()
        .args(["create", "slowapp", "--timeout", "1", "--addons", "redis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timed Out!"))
        .stdout(predicate::str::contains("slowapp.heroku.com").not());
    assert!(!s.stub.requests().iter().any(|r| r.contains("/addons/")));
}

#[test]
fn test_rename_outside_git_reminds_about_remotes() {
    let s = Session::new(two_apps());
    s.heroku()
        .args(["--app", "myapp", "rename", "newname"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "http://newname.heroku.com/ | git@heroku.com:newname.git",
        ))
        .stdout(predicate::str::contains("Don't forget to update your Git remotes"));
    assert!(s.stub.app_names().contains(&"newname".to_string()));
}

#[test]
fn test_destroy_with_matching_confirm() {
    let s = Session::new(two_apps());
    s.heroku()
        .args(["--app", "myapp", "destroy", "--confirm", "myapp"])
        .assert()
        .success();
    assert_eq!(s.stub.app_names(), ["theirapp"]);
}

#[test]
fn test_destroy_with_mismatched_confirm_keeps_app() {
    let s = Session::new(two_apps());
    s.heroku()
        .args(["--app", "myapp", "destroy", "--confirm", "otherapp"])
        .assert()
        .success()
        .stderr(predicate::str::contains("did not match"));
    assert!(s.stub.app_names().contains(&"myapp".to_string()));
    assert!(!s.stub.requests().iter().any(|r| r.starts_with("DELETE")));
}

#[test]
fn test_destroy_non_interactive_without_confirm_keeps_app() {
    let s = Session::new(two_apps());
    s.heroku()
        .args(["--yes", "--app", "myapp", "destroy"])
        .assert()
        .success();
    assert!(s.stub.app_names().contains(&"myapp".to_string()));
}

#[test]
fn test_git_remotes_follow_create_rename_destroy() {
    if !git_available() {
        return;
    }
    let s = Session::new(PlatformState::default());
    let dir = s.cwd.path();
    git(dir, &["init", "-q"]);

    s.heroku()
        .args(["create", "gitapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Git remote heroku added"));
    assert!(git(dir, &["remote", "-v"]).contains("git@heroku.com:gitapp.git"));

    // The app is now resolved from the remote.
    s.heroku()
        .args(["rename", "gitapp2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Git remote heroku updated"));
    let remotes = git(dir, &["remote", "-v"]);
    assert!(remotes.contains("git@heroku.com:gitapp2.git"), "{remotes}");

    s.heroku()
        .args(["destroy", "--confirm", "gitapp2"])
        .assert()
        .success();
    assert!(git(dir, &["remote"]).trim().is_empty());
    assert!(s.stub.app_names().is_empty());
}
