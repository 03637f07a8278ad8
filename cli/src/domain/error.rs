//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Platform errors ───────────────────────────────────────────────────────────

/// Errors reported by the remote platform API.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("App not found: {0}")]
    NotFound(String),

    /// The platform rejected the request, or it never reached the platform.
    #[error("{0}")]
    Request(String),
}

// ── Lifecycle errors ──────────────────────────────────────────────────────────

/// Local validation failures raised before any remote call.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Invalid name.")]
    InvalidName,

    #[error(
        "No app specified.\nRun this command from an app folder or specify which app to use with --app APP."
    )]
    NoAppResolved,
}

// ── Git errors ────────────────────────────────────────────────────────────────

/// Errors from git remote operations inside a repository.
///
/// A directory without git is not an error; ports report it as `None`.
#[derive(Debug, Error)]
pub enum VcsError {
    #[error("git {command} failed: {stderr}")]
    Command { command: String, stderr: String },

    #[error("git is not available: {0}")]
    Unavailable(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}

/// Stable machine-readable code for an error chain, used by `--json` output.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<PlatformError>() {
            return match e {
                PlatformError::NotFound(_) => "not_found",
                PlatformError::Request(_) => "request_failed",
            };
        }
        if cause.downcast_ref::<LifecycleError>().is_some() {
            return "invalid_input";
        }
        if cause.downcast_ref::<VcsError>().is_some() {
            return "vcs_failed";
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return "config_invalid";
        }
    }
    "error"
}
