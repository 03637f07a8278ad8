//! Read-only app queries: list, info, logs and the URL `open` hands off.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::Result;
use heroku_common::{AppInfo, AppSummary};

use crate::application::ports::{AppInspector, AppResolver, LogOptions};
use crate::domain::app::{AppUrls, normalize_name, with_derived_urls};

/// Apps visible to the account, plus who the account is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppListing {
    pub user: String,
    pub apps: Vec<AppSummary>,
}

impl AppListing {
    /// `true` when the current user owns `app`.
    #[must_use]
    pub fn owns(&self, app: &AppSummary) -> bool {
        app.owner == self.user
    }
}

/// List all apps.
///
/// # Errors
///
/// Platform errors propagate unchanged.
pub async fn list_apps(platform: &impl AppInspector) -> Result<AppListing> {
    let apps = platform.list().await?;
    let user = platform.user().await?;
    Ok(AppListing { user, apps })
}

/// Attributes of `name`, or of the current app when no name is given, with
/// `web_url` and `git_url` always filled in.
///
/// # Errors
///
/// `LifecycleError::NoAppResolved` when no app can be determined;
/// `PlatformError::NotFound` for an unknown app.
pub async fn app_info(
    platform: &impl AppInspector,
    resolver: &impl AppResolver,
    name: Option<&str>,
) -> Result<AppInfo> {
    let explicit = name.map(normalize_name).filter(|n| !n.is_empty());
    let app = match explicit {
        Some(app) => app,
        None => resolver.current_app().await?,
    };
    let info = platform.info(&app).await?;
    Ok(with_derived_urls(info, platform.host()))
}

/// Web URL of the current app.
///
/// # Errors
///
/// Same as [`app_info`].
pub async fn web_url(platform: &impl AppInspector, resolver: &impl AppResolver) -> Result<String> {
    let app = resolver.current_app().await?;
    let info = platform.info(&app).await?;
    Ok(AppUrls::of(&info, platform.host()).web_url)
}

/// Recent logs of the current app.
///
/// # Errors
///
/// `LifecycleError::NoAppResolved` when no app can be determined; platform
/// errors propagate unchanged.
pub async fn logs(
    platform: &impl AppInspector,
    resolver: &impl AppResolver,
    opts: &LogOptions,
) -> Result<String> {
    let app = resolver.current_app().await?;
    tracing::debug!(app = %app, ?opts, "reading logs");
    platform.read_logs(&app, opts).await
}

/// Output of the current app's last cron run.
///
/// # Errors
///
/// Same as [`logs`].
pub async fn cron_logs(platform: &impl AppInspector, resolver: &impl AppResolver) -> Result<String> {
    let app = resolver.current_app().await?;
    platform.cron_logs(&app).await
}
