//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed JSON document
//! on stdout; failures print the error object below instead.

use std::path::Path;

use anyhow::{Context, Result};
use heroku_common::AppInfo;
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::services::app_query::AppListing;
use crate::application::services::lifecycle::{
    CreateOutcome, DestroyOutcome, RemoteAdded, RemoteSync, RenameOutcome,
};
use crate::application::services::provisioning::PollOutcome;
use crate::domain::config::CliConfig;

/// Format the JSON error object.
///
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Print `value` as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("JSON serialization failed")?
    );
    Ok(())
}

/// Renders command results as JSON documents on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn render_list(&self, listing: &AppListing) -> Result<()> {
        let apps: Vec<_> = listing
            .apps
            .iter()
            .map(|a| json!({ "name": a.name, "owner": a.owner, "owned": listing.owns(a) }))
            .collect();
        print(&json!({ "user": listing.user, "apps": apps }))
    }

    pub fn render_info(&self, info: &AppInfo) -> Result<()> {
        print(info)
    }

    pub fn render_create(&self, outcome: &CreateOutcome) -> Result<()> {
        let (status, checks) = match outcome.provisioning {
            PollOutcome::Complete { checks } => ("complete", checks),
            PollOutcome::TimedOut { checks } => ("timed_out", checks),
        };
        let remote = match &outcome.remote {
            RemoteAdded::Added(name) => json!({ "name": name, "added": true }),
            RemoteAdded::AlreadyExists(name) => json!({ "name": name, "added": false }),
            RemoteAdded::NoGit => Value::Null,
        };
        print(&json!({
            "name": outcome.name,
            "web_url": outcome.urls.web_url,
            "git_url": outcome.urls.git_url,
            "status": status,
            "checks": checks,
            "addons": outcome.addons,
            "remote": remote,
        }))
    }

    pub fn render_rename(&self, outcome: &RenameOutcome) -> Result<()> {
        print(&json!({
            "old_name": outcome.old_name,
            "new_name": outcome.new_name,
            "web_url": outcome.urls.web_url,
            "git_url": outcome.urls.git_url,
            "remotes_updated": remotes(&outcome.remotes),
        }))
    }

    pub fn render_destroy(&self, outcome: &DestroyOutcome) -> Result<()> {
        match outcome {
            DestroyOutcome::Cancelled { app } => print(&json!({
                "app": app,
                "destroyed": false,
            })),
            DestroyOutcome::Destroyed { app, remotes: sync } => print(&json!({
                "app": app,
                "destroyed": true,
                "remotes_removed": remotes(sync),
            })),
        }
    }

    pub fn render_open(&self, url: &str) -> Result<()> {
        print(&json!({ "url": url }))
    }

    pub fn render_logs(&self, text: &str) -> Result<()> {
        print(&json!({ "logs": text }))
    }

    pub fn render_config(&self, config: &CliConfig, path: &Path) -> Result<()> {
        let settings: serde_json::Map<String, Value> = config
            .entries()
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::String(v)))
            .collect();
        print(&json!({ "path": path.display().to_string(), "settings": settings }))
    }

    pub fn render_config_set(&self, key: &str, value: &str) -> Result<()> {
        print(&json!({ "key": key, "value": value }))
    }

    pub fn render_version(&self, version: &str) -> Result<()> {
        print(&json!({ "version": version }))
    }
}

/// `null` when there is no git integration, the affected remotes otherwise.
fn remotes(sync: &RemoteSync) -> Value {
    match sync {
        RemoteSync::Synced(names) => json!(names),
        RemoteSync::NoGit => Value::Null,
    }
}
