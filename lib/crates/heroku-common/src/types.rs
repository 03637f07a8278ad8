use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of `GET /apps`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppSummary {
    pub name: String,
    pub owner: String,
}

/// The authenticated account, as returned by `GET /account`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub email: String,
}

/// Provisioning status reported by the platform.
///
/// Apps created before the platform tracked provisioning carry no status at
/// all; see `AppInfo::is_create_complete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CreateStatus {
    Pending,
    Complete,
    Other(String),
}

impl CreateStatus {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl From<String> for CreateStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "complete" => Self::Complete,
            _ => Self::Other(value),
        }
    }
}

impl From<CreateStatus> for String {
    fn from(value: CreateStatus) -> Self {
        value.to_string()
    }
}

impl fmt::Display for CreateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Complete => f.write_str("complete"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// An add-on attached to an app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddOn {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A user with access to an app. The owner is always one of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collaborator {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
}

/// Full attribute set of an app, as returned by `GET /apps/{name}`.
///
/// Attributes this client does not model are kept in `extra` so raw output
/// can still show everything the platform sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppInfo {
    pub name: String,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_status: Option<CreateStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_tables: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron_next_run: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron_finished_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub addons: Vec<AddOn>,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl AppInfo {
    /// Provisioning has finished. A missing status counts as finished.
    #[must_use]
    pub fn is_create_complete(&self) -> bool {
        self.create_status
            .as_ref()
            .is_none_or(CreateStatus::is_complete)
    }
}

/// Body of `POST /apps`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateRequest {
    pub app: NewApp,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewApp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Body of `PUT /apps/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateRequest {
    pub app: AppChanges,
}

/// Mutable attributes of an app. Only `name` is supported today.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Error body returned by the platform on a rejected request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(alias = "message")]
    pub error: String,
}
