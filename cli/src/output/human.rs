//! Human-readable terminal renderer.
//!
//! Line builders are pure functions so their exact text can be tested;
//! `HumanRenderer` only decides what to print and where.

use std::path::Path;

use anyhow::Result;
use heroku_common::AppInfo;
use owo_colors::OwoColorize as _;

use crate::application::services::app_query::AppListing;
use crate::application::services::lifecycle::{
    CreateOutcome, DestroyOutcome, RemoteAdded, RemoteSync, RenameOutcome,
};
use crate::application::services::provisioning::PollOutcome;
use crate::domain::config::CliConfig;
use crate::domain::format::{format_bytes, format_data_size, format_date};
use crate::output::OutputContext;

/// Width of the label column in formatted `info` output.
const LABEL_WIDTH: usize = 16;

/// Renders command results as human-readable terminal output.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    fn print_lines(&self, lines: &[String]) {
        if self.ctx.quiet {
            return;
        }
        for line in lines {
            println!("{line}");
        }
    }

    pub fn render_list(&self, listing: &AppListing) {
        self.print_lines(&list_lines(listing));
    }

    pub fn render_info(&self, info: &AppInfo, raw: bool) -> Result<()> {
        let lines = if raw {
            raw_info_lines(info)?
        } else {
            info_lines(info)
        };
        if let Some((title, rest)) = lines.split_first()
            && !raw
        {
            if !self.ctx.quiet {
                println!("{}", title.style(self.ctx.styles.header));
            }
            self.print_lines(rest);
        } else {
            self.print_lines(&lines);
        }
        Ok(())
    }

    pub fn render_create(&self, outcome: &CreateOutcome) {
        let mut lines = Vec::new();
        if matches!(outcome.provisioning, PollOutcome::Complete { .. }) {
            lines.push(outcome.urls.summary_line());
        }
        match &outcome.remote {
            RemoteAdded::Added(remote) => lines.push(format!("Git remote {remote} added")),
            RemoteAdded::AlreadyExists(remote) => {
                self.ctx
                    .warn(&format!("Git remote {remote} already exists, not changed"));
            }
            RemoteAdded::NoGit => {}
        }
        self.print_lines(&lines);
    }

    pub fn render_rename(&self, outcome: &RenameOutcome) {
        let mut lines = vec![outcome.urls.summary_line()];
        match &outcome.remotes {
            RemoteSync::Synced(remotes) => {
                lines.extend(remotes.iter().map(|r| format!("Git remote {r} updated")));
            }
            RemoteSync::NoGit => {
                lines.push(
                    "Don't forget to update your Git remotes on any local checkouts.".to_string(),
                );
            }
        }
        self.print_lines(&lines);
    }

    pub fn render_destroy(&self, outcome: &DestroyOutcome) {
        if let DestroyOutcome::Destroyed {
            remotes: RemoteSync::Synced(removed),
            ..
        } = outcome
        {
            for remote in removed {
                self.ctx.info(&format!("Git remote {remote} removed"));
            }
        }
    }

    pub fn render_open(&self, url: &str) {
        self.print_lines(&[format!("Opening {url}")]);
    }

    /// Printed verbatim, even with `--quiet`: the text is the result.
    pub fn render_logs(&self, text: &str) {
        print!("{text}");
        if !text.is_empty() && !text.ends_with('\n') {
            println!();
        }
    }

    pub fn render_config(&self, config: &CliConfig, path: &Path) {
        if self.ctx.quiet {
            return;
        }
        println!(
            "{}",
            format!("=== Settings ({})", path.display()).style(self.ctx.styles.header)
        );
        for (key, value) in config.entries() {
            println!("{key:<20} {value}");
        }
    }

    pub fn render_config_set(&self, key: &str, value: &str) {
        self.ctx.success(&format!("Set {key} = {value}"));
    }

    pub fn render_version(&self, version: &str) {
        self.print_lines(&[format!("heroku-cli/{version}")]);
    }
}

/// `list` output: owned apps by name, others with their owner.
#[must_use]
pub fn list_lines(listing: &AppListing) -> Vec<String> {
    if listing.apps.is_empty() {
        return vec!["You have no apps.".to_string()];
    }
    listing
        .apps
        .iter()
        .map(|app| {
            if listing.owns(app) {
                app.name.clone()
            } else {
                format!("{:<25} {}", app.name, app.owner)
            }
        })
        .collect()
}

fn labeled(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<LABEL_WIDTH$}{value}", format!("{label}:"))
}

/// Formatted `info` block. Expects derived URLs to be filled in already.
#[must_use]
pub fn info_lines(info: &AppInfo) -> Vec<String> {
    let mut lines = vec![format!("=== {}", info.name)];
    if let Some(url) = &info.web_url {
        lines.push(labeled("Web URL", url));
    }
    if let Some(domain) = &info.domain_name {
        lines.push(labeled("Domain name", format!("http://{domain}/")));
    }
    if let Some(url) = &info.git_url {
        lines.push(labeled("Git Repo", url));
    }
    lines.push(labeled("Dynos", count(info.dynos)));
    lines.push(labeled("Workers", count(info.workers)));
    if let Some(size) = info.repo_size {
        lines.push(labeled("Repo size", format_bytes(size)));
    }
    if let Some(size) = info.slug_size {
        lines.push(labeled("Slug size", format_bytes(size)));
    }
    if let Some(stack) = &info.stack {
        lines.push(labeled("Stack", stack));
    }
    if let Some(size) = info.database_size {
        lines.push(labeled("Data size", format_data_size(size, info.database_tables)));
    }
    if let Some(date) = &info.cron_next_run {
        lines.push(labeled("Next cron", format!("{} (scheduled)", format_date(date))));
    }
    if let Some(date) = &info.cron_finished_at {
        lines.push(labeled("Last cron", format!("{} (finished)", format_date(date))));
    }
    if !info.addons.is_empty() {
        let descriptions: Vec<&str> = info.addons.iter().map(|a| a.description.as_str()).collect();
        lines.push(labeled("Addons", descriptions.join(", ")));
    }
    lines.push(labeled("Owner", &info.owner));

    let lead = "Collaborators:";
    let others = info.collaborators.iter().filter(|c| c.email != info.owner);
    for (i, c) in others.enumerate() {
        let label = if i == 0 { lead } else { "" };
        lines.push(format!("{label:<width$}  {}", c.email, width = lead.len()));
    }

    if let Some(status) = &info.create_status
        && !status.is_complete()
    {
        lines.push(labeled("Create Status", status));
    }
    lines
}

/// Dyno and worker counts are always shown; an unreported count is blank.
fn count(n: Option<u32>) -> String {
    n.map(|n| n.to_string()).unwrap_or_default()
}

/// Raw `info` output: every attribute as `key=value`, keys sorted.
///
/// # Errors
///
/// Returns an error if the attributes cannot be serialized.
pub fn raw_info_lines(info: &AppInfo) -> Result<Vec<String>> {
    let serde_json::Value::Object(map) = serde_json::to_value(info)? else {
        anyhow::bail!("app attributes are not an object");
    };
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    let lines = keys
        .into_iter()
        .map(|key| match key.as_str() {
            "addons" => {
                let mut names: Vec<&str> = info.addons.iter().map(|a| a.name.as_str()).collect();
                names.sort_unstable();
                format!("addons={}", names.join(","))
            }
            "collaborators" => {
                let mut emails: Vec<&str> =
                    info.collaborators.iter().map(|c| c.email.as_str()).collect();
                emails.sort_unstable();
                format!("collaborators={}", emails.join(","))
            }
            _ => format!("{key}={}", raw_value(&map[key])),
        })
        .collect();
    Ok(lines)
}

fn raw_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
