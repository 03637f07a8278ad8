//! Current-app resolution from flags, environment and git remotes.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::application::ports::{AppResolver, GitRemotes};
use crate::domain::LifecycleError;
use crate::domain::app::normalize_name;

/// Environment variable naming the app when no `--app` flag is given.
pub const APP_ENV: &str = "HEROKU_APP";

/// Resolves the app an invocation is about.
///
/// Lookup order: `--app`, `HEROKU_APP`, the git remote named after the
/// configured default remote, then the only app any platform remote points
/// at.
pub struct ContextResolver<'a, G> {
    explicit: Option<String>,
    default_remote: String,
    git: &'a G,
}

impl<'a, G: GitRemotes> ContextResolver<'a, G> {
    pub fn new(explicit: Option<&str>, default_remote: &str, git: &'a G) -> Self {
        let explicit = explicit
            .map(normalize_name)
            .filter(|n| !n.is_empty())
            .or_else(|| {
                std::env::var(APP_ENV)
                    .ok()
                    .map(|v| normalize_name(&v))
                    .filter(|n| !n.is_empty())
            });
        Self {
            explicit,
            default_remote: default_remote.to_string(),
            git,
        }
    }
}

impl<G: GitRemotes> AppResolver for ContextResolver<'_, G> {
    async fn current_app(&self) -> Result<String> {
        if let Some(app) = &self.explicit {
            return Ok(app.clone());
        }
        let Some(remotes) = self.git.remotes().await? else {
            return Err(LifecycleError::NoAppResolved.into());
        };
        if let Some(app) = remotes.get(&self.default_remote) {
            tracing::debug!(remote = %self.default_remote, app = %app, "app from default remote");
            return Ok(app.clone());
        }
        let distinct: BTreeSet<&String> = remotes.values().collect();
        match distinct.into_iter().collect::<Vec<_>>().as_slice() {
            [only] => Ok((*only).clone()),
            _ => Err(LifecycleError::NoAppResolved.into()),
        }
    }
}
