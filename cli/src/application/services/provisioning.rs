//! Bounded wait for asynchronous app provisioning.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{AppInspector, ProgressReporter};

/// Delay between two status checks.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(1);

/// How long to wait and how often to check.
#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
    pub timeout: Duration,
    pub interval: Duration,
}

impl PollOptions {
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            interval: CHECK_INTERVAL,
        }
    }
}

/// Result of waiting for provisioning. A timeout is a notice, not an error:
/// the app stays `pending` on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Complete { checks: u32 },
    TimedOut { checks: u32 },
}

impl PollOutcome {
    #[must_use]
    pub fn checks(self) -> u32 {
        match self {
            Self::Complete { checks } | Self::TimedOut { checks } => checks,
        }
    }
}

/// Poll `create_complete` until it reports `true` or the deadline passes.
///
/// Each unsuccessful check emits one `tick` and is followed by a fixed
/// `interval` sleep. The deadline cancels the loop wherever it is, so the
/// total wait never exceeds `timeout`.
///
/// # Errors
///
/// A failing status check is not retried: its error is returned as is.
pub async fn wait_for_create(
    client: &impl AppInspector,
    reporter: &impl ProgressReporter,
    name: &str,
    opts: PollOptions,
) -> Result<PollOutcome> {
    let mut checks = 0u32;
    let poll = async {
        loop {
            checks += 1;
            tracing::debug!(app = name, check = checks, "checking create status");
            if client.create_complete(name).await? {
                return Ok::<(), anyhow::Error>(());
            }
            reporter.tick();
            tokio::time::sleep(opts.interval).await;
        }
    };

    let result = tokio::time::timeout(opts.timeout, poll).await;
    match result {
        Ok(Ok(())) => Ok(PollOutcome::Complete { checks }),
        Ok(Err(e)) => Err(e),
        Err(_) => {
            tracing::info!(app = name, checks, "create status still pending at deadline");
            Ok(PollOutcome::TimedOut { checks })
        }
    }
}
