//! Hands URLs off to the platform's default browser.

use anyhow::Result;

use crate::application::ports::{BrowserLauncher, CommandRunner};

/// Program and arguments that open `url` on this operating system.
#[must_use]
pub fn opener(url: &str) -> (&'static str, Vec<&str>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url])
    } else if cfg!(windows) {
        ("cmd", vec!["/C", "start", "", url])
    } else {
        ("xdg-open", vec![url])
    }
}

/// Launches the system browser through a `CommandRunner`.
pub struct SystemBrowser<R> {
    runner: R,
}

impl<R: CommandRunner> SystemBrowser<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> BrowserLauncher for SystemBrowser<R> {
    async fn open(&self, url: &str) -> Result<()> {
        let (program, args) = opener(url);
        let out = self.runner.run(program, &args).await?;
        if !out.status.success() {
            anyhow::bail!(
                "{program} could not open {url}: {}",
                String::from_utf8_lossy(&out.stderr).trim()
            );
        }
        Ok(())
    }
}
