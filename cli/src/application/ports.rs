//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and the shared wire types,
//! never from `crate::infra`, `crate::commands`, or `crate::output`.

use std::collections::BTreeMap;
use std::process::Output;

use anyhow::Result;
use heroku_common::{AppChanges, AppInfo, AppSummary};

use crate::domain::config::CliConfig;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Options for a create request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateOptions<'a> {
    /// Stack to run the new app on. `None` lets the platform choose.
    pub stack: Option<&'a str>,
}

/// Filters for reading an app's logs. Unset fields are left to the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Number of recent lines.
    pub num: Option<u32>,
    /// Only lines from this process.
    pub ps: Option<String>,
    /// Only lines from this source (`app`, `heroku`, ...).
    pub source: Option<String>,
}

impl LogOptions {
    /// Query parameters in the order the platform documents them.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(n) = self.num {
            pairs.push(("num", n.to_string()));
        }
        if let Some(ps) = &self.ps {
            pairs.push(("ps", ps.clone()));
        }
        if let Some(source) = &self.source {
            pairs.push(("source", source.clone()));
        }
        pairs
    }
}

/// Local git remotes that point at apps: remote name → app name.
pub type RemoteMap = BTreeMap<String, String>;

// ── Platform Port Traits ──────────────────────────────────────────────────────

/// Read-only queries against the hosting platform.
#[allow(async_fn_in_trait)]
pub trait AppInspector {
    /// Hosting domain used to derive default web and git URLs.
    fn host(&self) -> &str;
    /// Email of the authenticated account.
    async fn user(&self) -> Result<String>;
    /// All apps visible to the account.
    async fn list(&self) -> Result<Vec<AppSummary>>;
    /// Current attributes of an app. Fails with `PlatformError::NotFound`.
    async fn info(&self, name: &str) -> Result<AppInfo>;
    /// Non-blocking provisioning check: `true` once `create_status` is `complete`.
    async fn create_complete(&self, name: &str) -> Result<bool>;
    /// Recent log lines of an app.
    async fn read_logs(&self, name: &str, opts: &LogOptions) -> Result<String>;
    /// Output of the app's last cron run, as the platform formats it.
    async fn cron_logs(&self, name: &str) -> Result<String>;
}

/// State-changing operations against the hosting platform.
#[allow(async_fn_in_trait)]
pub trait AppLifecycle {
    /// Submit a creation request and return the authoritative app name.
    async fn create_request(&self, name: Option<&str>, opts: &CreateOptions<'_>)
    -> Result<String>;
    /// Attach an add-on to an app.
    async fn install_addon(&self, name: &str, addon: &str) -> Result<()>;
    /// Apply attribute changes (rename).
    async fn update(&self, name: &str, changes: &AppChanges) -> Result<()>;
    /// Destroy an app and all of its add-ons.
    async fn destroy(&self, name: &str) -> Result<()>;
}

/// Composite trait: any type implementing both sub-traits is a `PlatformClient`.
pub trait PlatformClient: AppInspector + AppLifecycle {}

/// Blanket implementation: any type implementing both sub-traits is a `PlatformClient`.
impl<T> PlatformClient for T where T: AppInspector + AppLifecycle {}

// ── Git Port ──────────────────────────────────────────────────────────────────

/// Named git remotes of the working directory.
#[allow(async_fn_in_trait)]
pub trait GitRemotes {
    /// Remotes pointing at platform apps, or `None` when the working
    /// directory has no git integration at all.
    async fn remotes(&self) -> Result<Option<RemoteMap>>;
    /// Names of all remotes, wherever they point; `None` without git.
    async fn remote_names(&self) -> Result<Option<Vec<String>>>;
    /// Add a remote. Fails with `VcsError` if git rejects it.
    async fn add_remote(&self, name: &str, url: &str) -> Result<()>;
    /// Remove a remote. Fails with `VcsError` if git rejects it.
    async fn remove_remote(&self, name: &str) -> Result<()>;
}

// ── Context Ports ─────────────────────────────────────────────────────────────

/// Resolves which app the current invocation is about.
#[allow(async_fn_in_trait)]
pub trait AppResolver {
    /// Name of the current app. Fails with `LifecycleError::NoAppResolved`.
    async fn current_app(&self) -> Result<String>;
}

/// Asks the user to confirm a destructive action. Sync trait; prompts block.
#[cfg_attr(test, mockall::automock)]
pub trait DestroyConfirmer {
    /// `true` only if the user confirmed with the exact app name.
    fn confirm_destroy(&self, app: &str, url: &str) -> Result<bool>;
}

/// Hands a URL off to the user's browser.
#[allow(async_fn_in_trait)]
pub trait BrowserLauncher {
    async fn open(&self, url: &str) -> Result<()>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
    /// Run a program with inherited stdio and return only its exit status.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<std::process::ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit an incremental, non-final signal for the current step.
    fn tick(&self);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when none is saved.
    fn load(&self) -> Result<CliConfig>;
    /// Persist the configuration.
    fn save(&self, config: &CliConfig) -> Result<()>;
    /// Location of the configuration file.
    fn path(&self) -> Result<std::path::PathBuf>;
}
