//! `GitRemotes` implementation that shells out to `git`.

use std::process::Output;

use anyhow::Result;

use crate::application::ports::{CommandRunner, GitRemotes, RemoteMap};
use crate::domain::VcsError;
use crate::domain::app::app_from_remote_url;

/// Git remotes of the current working directory, read and written through
/// the `git` binary.
pub struct GitCli<R> {
    runner: R,
    host: String,
}

impl<R: CommandRunner> GitCli<R> {
    pub fn new(runner: R, host: &str) -> Self {
        Self {
            runner,
            host: host.to_string(),
        }
    }

    /// `true` when `git` runs and the working directory is inside a
    /// repository. A missing binary counts as no integration.
    async fn in_repository(&self) -> bool {
        match self.runner.run("git", &["rev-parse", "--git-dir"]).await {
            Ok(out) => out.status.success(),
            Err(e) => {
                tracing::debug!(error = %e, "git unavailable");
                false
            }
        }
    }

    async fn git(&self, args: &[&str]) -> Result<Output> {
        let out = self
            .runner
            .run("git", args)
            .await
            .map_err(|e| VcsError::Unavailable(e.to_string()))?;
        if !out.status.success() {
            return Err(VcsError::Command {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(out)
    }
}

/// Parse `git remote -v` output into remote name → app name, keeping only
/// fetch URLs that point at `host`.
#[must_use]
pub fn parse_remote_verbose(stdout: &str, host: &str) -> RemoteMap {
    stdout
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let (name, url, kind) = (parts.next()?, parts.next()?, parts.next());
            if kind.is_some_and(|k| k != "(fetch)") {
                return None;
            }
            app_from_remote_url(url, host).map(|app| (name.to_string(), app))
        })
        .collect()
}

impl<R: CommandRunner> GitRemotes for GitCli<R> {
    async fn remotes(&self) -> Result<Option<RemoteMap>> {
        if !self.in_repository().await {
            return Ok(None);
        }
        let out = self.git(&["remote", "-v"]).await?;
        let map = parse_remote_verbose(&String::from_utf8_lossy(&out.stdout), &self.host);
        tracing::debug!(count = map.len(), "platform remotes");
        Ok(Some(map))
    }

    async fn remote_names(&self) -> Result<Option<Vec<String>>> {
        if !self.in_repository().await {
            return Ok(None);
        }
        let out = self.git(&["remote"]).await?;
        Ok(Some(
            String::from_utf8_lossy(&out.stdout)
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_owned)
                .collect(),
        ))
    }

    async fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.git(&["remote", "add", name, url]).await?;
        tracing::info!(remote = name, url, "git remote added");
        Ok(())
    }

    async fn remove_remote(&self, name: &str) -> Result<()> {
        self.git(&["remote", "rm", name]).await?;
        tracing::info!(remote = name, "git remote removed");
        Ok(())
    }
}
