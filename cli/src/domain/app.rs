//! App identity rules: name normalization, add-on lists, derived URLs and
//! git remote URL parsing.
//!
//! Pure functions only: no I/O, no async.

use heroku_common::AppInfo;
use regex::Regex;

/// Normalize a user-supplied app name: trimmed and lowercased.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize an optional create-time name. Blank names are treated as
/// absent so the platform assigns one.
#[must_use]
pub fn normalize_optional_name(raw: Option<&str>) -> Option<String> {
    raw.map(normalize_name).filter(|n| !n.is_empty())
}

/// Split a comma-separated add-on list, preserving order.
///
/// An empty string yields an empty list; blank entries are dropped.
#[must_use]
pub fn parse_addons(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// `http://{name}.{host}/`
#[must_use]
pub fn default_web_url(name: &str, host: &str) -> String {
    format!("http://{name}.{host}/")
}

/// `git@{host}:{name}.git`
#[must_use]
pub fn default_git_url(name: &str, host: &str) -> String {
    format!("git@{host}:{name}.git")
}

/// Web and git URLs of an app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppUrls {
    pub web_url: String,
    pub git_url: String,
}

impl AppUrls {
    /// URLs as reported by the platform, falling back to the derived defaults.
    #[must_use]
    pub fn of(info: &AppInfo, host: &str) -> Self {
        Self {
            web_url: info
                .web_url
                .clone()
                .unwrap_or_else(|| default_web_url(&info.name, host)),
            git_url: info
                .git_url
                .clone()
                .unwrap_or_else(|| default_git_url(&info.name, host)),
        }
    }

    /// `web_url | git_url`
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("{} | {}", self.web_url, self.git_url)
    }
}

/// Fill in `web_url` and `git_url` when the platform omitted them.
#[must_use]
pub fn with_derived_urls(mut info: AppInfo, host: &str) -> AppInfo {
    let urls = AppUrls::of(&info, host);
    info.web_url = Some(urls.web_url);
    info.git_url = Some(urls.git_url);
    info
}

/// URL shown when asking to confirm a destroy: the custom domain if one is
/// set, the derived web URL otherwise.
#[must_use]
pub fn display_url(info: &AppInfo, host: &str) -> String {
    info.domain_name
        .clone()
        .unwrap_or_else(|| default_web_url(&info.name, host))
}

/// Extract the app name from a git remote URL pointing at `host`.
///
/// Recognizes `git@{host}:{app}.git` and `https://git.{host}/{app}.git`.
#[must_use]
pub fn app_from_remote_url(url: &str, host: &str) -> Option<String> {
    let host = regex::escape(host);
    let pattern = format!(r"^(?:git@{host}:|https://git\.{host}/)([a-z0-9][a-z0-9-]*)\.git$");
    let re = Regex::new(&pattern).ok()?;
    re.captures(url.trim())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
}
