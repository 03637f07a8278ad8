//! HTTP implementation of the `PlatformClient` ports.
//!
//! Talks JSON to the platform management API with `reqwest`. Credentials
//! are passed through as HTTP basic auth; nothing here logs them.

use std::time::Duration;

use anyhow::{Context, Result};
use heroku_common::{
    Account, AppChanges, AppInfo, AppSummary, CreateRequest, ErrorBody, NewApp, UpdateRequest,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::application::ports::{AppInspector, AppLifecycle, CreateOptions, LogOptions};
use crate::domain::{LifecycleError, PlatformError};

/// Per-request timeout. Provisioning waits are bounded separately.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "HEROKU_API_KEY";

/// Body of the logs endpoint when the app has no log session service.
const OLD_LOGS: &str = "Use old logs";

#[derive(Deserialize)]
struct Created {
    name: String,
}

/// Platform client over the management REST API.
pub struct HttpPlatformClient {
    client: Client,
    base: Url,
    host: String,
    api_key: Option<String>,
}

impl HttpPlatformClient {
    /// Build a client for `api_url`, deriving app URLs from `host`.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` is not an absolute URL or the
    /// HTTP client cannot be constructed.
    pub fn new(api_url: &str, host: &str, api_key: Option<String>) -> Result<Self> {
        let base = Url::parse(api_url.trim())
            .with_context(|| format!("invalid platform API URL: {api_url}"))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("invalid platform API URL: {api_url}");
        }
        let client = Client::builder()
            .user_agent(concat!("heroku-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("cannot build HTTP client")?;
        Ok(Self {
            client,
            base,
            host: host.to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    /// The API base with `segments` appended, each encoded as one path segment.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("invalid platform API URL: {}", self.base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `/apps/{name}/{rest..}`. Names that cannot stay a single segment
    /// are rejected before any request is made.
    fn app_url(&self, name: &str, rest: &[&str]) -> Result<Url> {
        if std::iter::once(name)
            .chain(rest.iter().copied())
            .any(|s| matches!(s.trim(), "" | "." | ".."))
        {
            return Err(LifecycleError::InvalidName.into());
        }
        let mut segments = vec!["apps", name];
        segments.extend_from_slice(rest);
        self.url(&segments)
    }

    /// Send a request with credentials attached.
    ///
    /// A 404 becomes `NotFound(app)` when the request targets a single app.
    async fn send(&self, req: RequestBuilder, app: Option<&str>) -> Result<Response> {
        let req = match &self.api_key {
            Some(key) => req.basic_auth("", Some(key)),
            None => req,
        };
        dispatch(req.header(reqwest::header::ACCEPT, "application/json"), app).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, app: Option<&str>) -> Result<T> {
        let path = url.path().to_string();
        let resp = self.send(self.client.get(url), app).await?;
        resp.json()
            .await
            .map_err(|e| PlatformError::Request(format!("unexpected response from {path}: {e}")).into())
    }

    async fn get_text(&self, url: Url, app: Option<&str>) -> Result<String> {
        let resp = self.send(self.client.get(url), app).await?;
        read_text(resp).await
    }
}

/// Send a request and map failures onto `PlatformError`.
async fn dispatch(req: RequestBuilder, app: Option<&str>) -> Result<Response> {
    let resp = req
        .send()
        .await
        .map_err(|e| PlatformError::Request(e.to_string()))?;

    let status = resp.status();
    tracing::debug!(url = %resp.url(), %status, "platform response");
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::NOT_FOUND
        && let Some(app) = app
    {
        return Err(PlatformError::NotFound(app.to_string()).into());
    }
    let body = resp.text().await.unwrap_or_default();
    Err(PlatformError::Request(error_message(status, &body)).into())
}

async fn read_text(resp: Response) -> Result<String> {
    resp.text()
        .await
        .map_err(|e| PlatformError::Request(format!("cannot read response: {e}")).into())
}

/// Message shown for a rejected request: the platform's own wording when it
/// sent one, the HTTP status otherwise.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .ok()
        .or_else(|| {
            let text = body.trim();
            (!text.is_empty() && text.len() <= 200 && !text.starts_with('<'))
                .then(|| text.to_string())
        })
        .unwrap_or_else(|| format!("HTTP {status}"))
}

impl AppInspector for HttpPlatformClient {
    fn host(&self) -> &str {
        &self.host
    }

    async fn user(&self) -> Result<String> {
        let account: Account = self.get_json(self.url(&["account"])?, None).await?;
        Ok(account.email)
    }

    async fn list(&self) -> Result<Vec<AppSummary>> {
        self.get_json(self.url(&["apps"])?, None).await
    }

    async fn info(&self, name: &str) -> Result<AppInfo> {
        self.get_json(self.app_url(name, &[])?, Some(name)).await
    }

    async fn create_complete(&self, name: &str) -> Result<bool> {
        let info = self.info(name).await?;
        tracing::debug!(app = name, status = ?info.create_status, "create status");
        Ok(info.is_create_complete())
    }

    async fn read_logs(&self, name: &str, opts: &LogOptions) -> Result<String> {
        let mut url = self.app_url(name, &["logs"])?;
        url.query_pairs_mut()
            .append_pair("logplex", "true")
            .extend_pairs(opts.query_pairs());
        let session = self.get_text(url, Some(name)).await?;
        let session = session.trim();

        if session == OLD_LOGS {
            tracing::debug!(app = name, "no log session service, using old logs");
            return self.get_text(self.app_url(name, &["logs"])?, Some(name)).await;
        }
        let session_url = Url::parse(session).map_err(|e| {
            PlatformError::Request(format!("unexpected logs response: {e}"))
        })?;
        // The session URL is already authorized; credentials stay with the API.
        let resp = dispatch(self.client.get(session_url), None).await?;
        read_text(resp).await
    }

    async fn cron_logs(&self, name: &str) -> Result<String> {
        self.get_text(self.app_url(name, &["cron_logs"])?, Some(name))
            .await
    }
}

impl AppLifecycle for HttpPlatformClient {
    async fn create_request(
        &self,
        name: Option<&str>,
        opts: &CreateOptions<'_>,
    ) -> Result<String> {
        let body = CreateRequest {
            app: NewApp {
                name: name.map(str::to_owned),
                stack: opts.stack.map(str::to_owned),
            },
        };
        let resp = self
            .send(self.client.post(self.url(&["apps"])?).json(&body), None)
            .await?;
        let created: Created = resp
            .json()
            .await
            .map_err(|e| PlatformError::Request(format!("unexpected create response: {e}")))?;
        tracing::info!(app = %created.name, "app created");
        Ok(created.name)
    }

    async fn install_addon(&self, name: &str, addon: &str) -> Result<()> {
        self.send(
            self.client.post(self.app_url(name, &["addons", addon])?),
            None,
        )
        .await?;
        tracing::info!(app = name, addon, "add-on installed");
        Ok(())
    }

    async fn update(&self, name: &str, changes: &AppChanges) -> Result<()> {
        let body = UpdateRequest {
            app: changes.clone(),
        };
        self.send(
            self.client.put(self.app_url(name, &[])?).json(&body),
            Some(name),
        )
        .await?;
        tracing::info!(app = name, "app updated");
        Ok(())
    }

    async fn destroy(&self, name: &str) -> Result<()> {
        self.send(
            self.client.delete(self.app_url(name, &[])?),
            Some(name),
        )
        .await?;
        tracing::info!(app = name, "app destroyed");
        Ok(())
    }
}
