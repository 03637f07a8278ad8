//! App lifecycle use-cases: create, rename, destroy.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! The platform client and git remotes are injected once through
//! [`Lifecycle::new`]; context (current app, confirmation, progress) is
//! passed per call.

use std::time::Duration;

use anyhow::Result;
use heroku_common::AppChanges;

use crate::application::ports::{
    AppResolver, CreateOptions, DestroyConfirmer, GitRemotes, PlatformClient, ProgressReporter,
};
use crate::application::services::provisioning::{self, PollOptions, PollOutcome};
use crate::domain::app::{
    AppUrls, default_git_url, display_url, normalize_name, normalize_optional_name, parse_addons,
};
use crate::domain::LifecycleError;

/// Arguments of `heroku create`.
#[derive(Debug, Clone, Copy)]
pub struct CreateParams<'a> {
    /// Requested name; blank or absent lets the platform assign one.
    pub name: Option<&'a str>,
    /// Git remote to add for the new app.
    pub remote: &'a str,
    pub stack: Option<&'a str>,
    /// Upper bound on the provisioning wait.
    pub timeout: Duration,
    /// Comma-separated add-on names.
    pub addons: &'a str,
}

/// What happened to the git remote requested by `create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteAdded {
    Added(String),
    AlreadyExists(String),
    NoGit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub name: String,
    /// URLs captured right after the create request.
    pub urls: AppUrls,
    pub provisioning: PollOutcome,
    /// Add-ons installed, in request order. Empty after a timeout.
    pub addons: Vec<String>,
    pub remote: RemoteAdded,
}

/// What happened to local git remotes after a rename or destroy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteSync {
    /// Names of the remotes that were repointed or removed.
    Synced(Vec<String>),
    NoGit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    pub old_name: String,
    pub new_name: String,
    pub urls: AppUrls,
    pub remotes: RemoteSync,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyOutcome {
    /// The user did not confirm; nothing was changed.
    Cancelled { app: String },
    Destroyed { app: String, remotes: RemoteSync },
}

/// Orchestrates state-changing app operations.
pub struct Lifecycle<'a, P, G> {
    platform: &'a P,
    git: &'a G,
}

impl<'a, P: PlatformClient, G: GitRemotes> Lifecycle<'a, P, G> {
    pub fn new(platform: &'a P, git: &'a G) -> Self {
        Self { platform, git }
    }

    /// Create an app, wait for provisioning, install add-ons and add a git
    /// remote for it.
    ///
    /// A provisioning timeout skips the add-ons but still adds the remote.
    ///
    /// # Errors
    ///
    /// Platform errors propagate unchanged. A failing add-on aborts the
    /// remaining installs and the remote step; nothing is rolled back.
    pub async fn create(
        &self,
        params: CreateParams<'_>,
        reporter: &impl ProgressReporter,
    ) -> Result<CreateOutcome> {
        let requested = normalize_optional_name(params.name);
        let name = self
            .platform
            .create_request(
                requested.as_deref(),
                &CreateOptions {
                    stack: params.stack,
                },
            )
            .await?;
        tracing::debug!(app = %name, "create request accepted");
        reporter.step(&format!("Creating {name}..."));

        let info = self.platform.info(&name).await?;
        let urls = AppUrls::of(&info, self.platform.host());

        let provisioning = provisioning::wait_for_create(
            self.platform,
            reporter,
            &name,
            PollOptions::with_timeout(params.timeout),
        )
        .await?;

        let mut addons = Vec::new();
        match provisioning {
            PollOutcome::Complete { .. } => {
                reporter.success("done");
                for addon in parse_addons(params.addons) {
                    reporter.step(&format!("Adding {addon} to {name}..."));
                    self.platform.install_addon(&name, &addon).await?;
                    addons.push(addon);
                }
            }
            PollOutcome::TimedOut { .. } => {
                reporter.warn("Timed Out! Check heroku info for status updates.");
            }
        }

        let remote = self.add_remote(&name, params.remote).await?;
        Ok(CreateOutcome {
            name,
            urls,
            provisioning,
            addons,
            remote,
        })
    }

    /// Rename the current app and repoint every git remote that targeted it.
    ///
    /// # Errors
    ///
    /// Fails with `LifecycleError::InvalidName` before any remote call if the
    /// new name is blank. Platform and git errors propagate unchanged.
    pub async fn rename(
        &self,
        resolver: &impl AppResolver,
        new_name: &str,
    ) -> Result<RenameOutcome> {
        let old_name = resolver.current_app().await?;
        let new_name = normalize_name(new_name);
        if new_name.is_empty() {
            return Err(LifecycleError::InvalidName.into());
        }

        self.platform
            .update(
                &old_name,
                &AppChanges {
                    name: Some(new_name.clone()),
                },
            )
            .await?;
        tracing::debug!(from = %old_name, to = %new_name, "app renamed");

        let info = self.platform.info(&new_name).await?;
        let urls = AppUrls::of(&info, self.platform.host());

        let git_url = default_git_url(&new_name, self.platform.host());
        let remotes = match self.git.remotes().await? {
            None => RemoteSync::NoGit,
            Some(map) => {
                let mut updated = Vec::new();
                for (remote, app) in map {
                    if app != old_name {
                        continue;
                    }
                    self.git.remove_remote(&remote).await?;
                    self.git.add_remote(&remote, &git_url).await?;
                    updated.push(remote);
                }
                RemoteSync::Synced(updated)
            }
        };

        Ok(RenameOutcome {
            old_name,
            new_name,
            urls,
            remotes,
        })
    }

    /// Destroy the current app after the user confirms its exact name, then
    /// drop every git remote that targeted it.
    ///
    /// # Errors
    ///
    /// Platform and git errors propagate unchanged. Declining the
    /// confirmation is not an error.
    pub async fn destroy(
        &self,
        resolver: &impl AppResolver,
        confirmer: &impl DestroyConfirmer,
        reporter: &impl ProgressReporter,
    ) -> Result<DestroyOutcome> {
        let app = resolver.current_app().await?;
        let info = self.platform.info(&app).await?;
        let url = display_url(&info, self.platform.host());

        if !confirmer.confirm_destroy(&app, &url)? {
            tracing::debug!(app = %app, "destroy not confirmed");
            return Ok(DestroyOutcome::Cancelled { app });
        }

        reporter.step(&format!("Destroying {app} (including all add-ons)..."));
        self.platform.destroy(&app).await?;

        let remotes = match self.git.remotes().await? {
            None => RemoteSync::NoGit,
            Some(map) => {
                let mut removed = Vec::new();
                for (remote, target) in map {
                    if target == app {
                        self.git.remove_remote(&remote).await?;
                        removed.push(remote);
                    }
                }
                RemoteSync::Synced(removed)
            }
        };
        reporter.success("done");

        Ok(DestroyOutcome::Destroyed { app, remotes })
    }

    async fn add_remote(&self, app: &str, remote: &str) -> Result<RemoteAdded> {
        let Some(names) = self.git.remote_names().await? else {
            return Ok(RemoteAdded::NoGit);
        };
        if names.iter().any(|n| n == remote) {
            return Ok(RemoteAdded::AlreadyExists(remote.to_string()));
        }
        self.git
            .add_remote(remote, &default_git_url(app, self.platform.host()))
            .await?;
        Ok(RemoteAdded::Added(remote.to_string()))
    }
}
