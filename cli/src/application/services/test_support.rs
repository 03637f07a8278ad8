//! Shared fakes for service tests.
//!
//! `FakePlatform` and `FakeGit` keep in-memory state and record every call
//! in order so tests can assert on exact call sequences.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use anyhow::Result;
use heroku_common::{AppChanges, AppInfo, AppSummary, CreateStatus};

use crate::application::ports::{
    AppInspector, AppLifecycle, AppResolver, CreateOptions, GitRemotes, LogOptions,
    ProgressReporter, RemoteMap,
};
use crate::domain::app::app_from_remote_url;
use crate::domain::{LifecycleError, PlatformError, VcsError};

pub const HOST: &str = "heroku.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    User,
    List,
    Info(String),
    CreateRequest {
        name: Option<String>,
        stack: Option<String>,
    },
    CreateComplete(String),
    ReadLogs(String, LogOptions),
    CronLogs(String),
    InstallAddon(String, String),
    Update(String, String),
    Destroy(String),
}

pub fn app(name: &str) -> AppInfo {
    AppInfo {
        name: name.to_string(),
        owner: "owner@example.com".to_string(),
        stack: None,
        create_status: Some(CreateStatus::Complete),
        web_url: None,
        git_url: None,
        domain_name: None,
        dynos: None,
        workers: None,
        repo_size: None,
        slug_size: None,
        database_size: None,
        database_tables: None,
        cron_next_run: None,
        cron_finished_at: None,
        addons: Vec::new(),
        collaborators: Vec::new(),
        extra: BTreeMap::new(),
    }
}

// ── Platform ─────────────────────────────────────────────────────────────────

pub struct FakePlatform {
    pub apps: RefCell<BTreeMap<String, AppInfo>>,
    pub calls: RefCell<Vec<Call>>,
    /// Name handed out when a create request carries none.
    pub assigned_name: String,
    /// `create_complete` turns true on this check (never if `None`).
    pub complete_on_check: Option<u32>,
    pub failing_addon: Option<String>,
    pub reject_update: bool,
    pub checks: Cell<u32>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            apps: RefCell::new(BTreeMap::new()),
            calls: RefCell::new(Vec::new()),
            assigned_name: "sushi-42".to_string(),
            complete_on_check: Some(1),
            failing_addon: None,
            reject_update: false,
            checks: Cell::new(0),
        }
    }

    pub fn with_app(self, info: AppInfo) -> Self {
        self.apps.borrow_mut().insert(info.name.clone(), info);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn mutating_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| {
                matches!(
                    c,
                    Call::CreateRequest { .. }
                        | Call::InstallAddon(..)
                        | Call::Update(..)
                        | Call::Destroy(_)
                )
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl AppInspector for FakePlatform {
    fn host(&self) -> &str {
        HOST
    }

    async fn user(&self) -> Result<String> {
        self.record(Call::User);
        Ok("owner@example.com".to_string())
    }

    async fn list(&self) -> Result<Vec<AppSummary>> {
        self.record(Call::List);
        Ok(self
            .apps
            .borrow()
            .values()
            .map(|a| AppSummary {
                name: a.name.clone(),
                owner: a.owner.clone(),
            })
            .collect())
    }

    async fn info(&self, name: &str) -> Result<AppInfo> {
        self.record(Call::Info(name.to_string()));
        self.apps
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| PlatformError::NotFound(name.to_string()).into())
    }

    async fn create_complete(&self, name: &str) -> Result<bool> {
        self.record(Call::CreateComplete(name.to_string()));
        let n = self.checks.get() + 1;
        self.checks.set(n);
        let done = self.complete_on_check.is_some_and(|c| n >= c);
        if done && let Some(a) = self.apps.borrow_mut().get_mut(name) {
            a.create_status = Some(CreateStatus::Complete);
        }
        Ok(done)
    }

    async fn read_logs(&self, name: &str, opts: &LogOptions) -> Result<String> {
        self.record(Call::ReadLogs(name.to_string(), opts.clone()));
        if !self.apps.borrow().contains_key(name) {
            return Err(PlatformError::NotFound(name.to_string()).into());
        }
        Ok(format!("{name}[web.1]: started\n"))
    }

    async fn cron_logs(&self, name: &str) -> Result<String> {
        self.record(Call::CronLogs(name.to_string()));
        if !self.apps.borrow().contains_key(name) {
            return Err(PlatformError::NotFound(name.to_string()).into());
        }
        Ok("cron logs".to_string())
    }
}

impl AppLifecycle for FakePlatform {
    async fn create_request(
        &self,
        name: Option<&str>,
        opts: &CreateOptions<'_>,
    ) -> Result<String> {
        self.record(Call::CreateRequest {
            name: name.map(str::to_owned),
            stack: opts.stack.map(str::to_owned),
        });
        let name = name.map_or_else(|| self.assigned_name.clone(), str::to_owned);
        if self.apps.borrow().contains_key(&name) {
            return Err(PlatformError::Request("Name is already taken".into()).into());
        }
        let mut info = app(&name);
        info.stack = opts.stack.map(str::to_owned);
        info.create_status = Some(CreateStatus::Pending);
        self.apps.borrow_mut().insert(name.clone(), info);
        Ok(name)
    }

    async fn install_addon(&self, name: &str, addon: &str) -> Result<()> {
        self.record(Call::InstallAddon(name.to_string(), addon.to_string()));
        if self.failing_addon.as_deref() == Some(addon) {
            return Err(PlatformError::Request(format!("Add-on not found: {addon}")).into());
        }
        Ok(())
    }

    async fn update(&self, name: &str, changes: &AppChanges) -> Result<()> {
        let new_name = changes.name.clone().unwrap_or_default();
        self.record(Call::Update(name.to_string(), new_name.clone()));
        if self.reject_update {
            return Err(PlatformError::Request("Name is already taken".into()).into());
        }
        let mut apps = self.apps.borrow_mut();
        let mut info = apps
            .remove(name)
            .ok_or_else(|| PlatformError::NotFound(name.to_string()))?;
        info.name.clone_from(&new_name);
        apps.insert(new_name, info);
        Ok(())
    }

    async fn destroy(&self, name: &str) -> Result<()> {
        self.record(Call::Destroy(name.to_string()));
        self.apps
            .borrow_mut()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| PlatformError::NotFound(name.to_string()).into())
    }
}

// ── Git ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitOp {
    Add(String, String),
    Remove(String),
}

/// In-memory git remotes: remote name → URL. `None` means no repository.
pub struct FakeGit {
    pub remotes: RefCell<Option<BTreeMap<String, String>>>,
    pub ops: RefCell<Vec<GitOp>>,
    /// Makes every `remove_remote` fail as git would on a locked config.
    pub fail_remove: bool,
}

impl FakeGit {
    pub fn new(remotes: &[(&str, &str)]) -> Self {
        Self {
            remotes: RefCell::new(Some(
                remotes
                    .iter()
                    .map(|(n, u)| ((*n).to_string(), (*u).to_string()))
                    .collect(),
            )),
            ops: RefCell::new(Vec::new()),
            fail_remove: false,
        }
    }

    pub fn without_repo() -> Self {
        Self {
            remotes: RefCell::new(None),
            ops: RefCell::new(Vec::new()),
            fail_remove: false,
        }
    }

    pub fn urls(&self) -> BTreeMap<String, String> {
        self.remotes.borrow().clone().unwrap_or_default()
    }
}

impl GitRemotes for FakeGit {
    async fn remotes(&self) -> Result<Option<RemoteMap>> {
        Ok(self.remotes.borrow().as_ref().map(|r| {
            r.iter()
                .filter_map(|(name, url)| app_from_remote_url(url, HOST).map(|a| (name.clone(), a)))
                .collect()
        }))
    }

    async fn remote_names(&self) -> Result<Option<Vec<String>>> {
        Ok(self
            .remotes
            .borrow()
            .as_ref()
            .map(|r| r.keys().cloned().collect()))
    }

    async fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.ops
            .borrow_mut()
            .push(GitOp::Add(name.to_string(), url.to_string()));
        let mut remotes = self.remotes.borrow_mut();
        let r = remotes
            .as_mut()
            .ok_or_else(|| VcsError::Unavailable("not a git repository".into()))?;
        if r.contains_key(name) {
            return Err(VcsError::Command {
                command: format!("remote add {name}"),
                stderr: format!("remote {name} already exists."),
            }
            .into());
        }
        r.insert(name.to_string(), url.to_string());
        Ok(())
    }

    async fn remove_remote(&self, name: &str) -> Result<()> {
        self.ops.borrow_mut().push(GitOp::Remove(name.to_string()));
        if self.fail_remove {
            return Err(VcsError::Command {
                command: format!("remote remove {name}"),
                stderr: "could not lock config file .git/config".into(),
            }
            .into());
        }
        let mut remotes = self.remotes.borrow_mut();
        let r = remotes
            .as_mut()
            .ok_or_else(|| VcsError::Unavailable("not a git repository".into()))?;
        r.remove(name).map(|_| ()).ok_or_else(|| {
            VcsError::Command {
                command: format!("remote remove {name}"),
                stderr: format!("No such remote: '{name}'"),
            }
            .into()
        })
    }
}

// ── Context ──────────────────────────────────────────────────────────────────

pub struct FixedApp(pub Option<&'static str>);

impl AppResolver for FixedApp {
    async fn current_app(&self) -> Result<String> {
        self.0
            .map(str::to_owned)
            .ok_or_else(|| LifecycleError::NoAppResolved.into())
    }
}

/// Records reporter events as `"step: ..."`, `"."`, `"ok: ..."`, `"warn: ..."`.
#[derive(Default)]
pub struct RecordingReporter(pub RefCell<Vec<String>>);

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.0.borrow_mut().push(format!("step: {message}"));
    }
    fn tick(&self) {
        self.0.borrow_mut().push(".".to_string());
    }
    fn success(&self, message: &str) {
        self.0.borrow_mut().push(format!("ok: {message}"));
    }
    fn warn(&self, message: &str) {
        self.0.borrow_mut().push(format!("warn: {message}"));
    }
}
