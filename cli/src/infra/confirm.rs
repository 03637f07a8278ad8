//! Destroy confirmation: `--confirm APP` or a typed-name prompt.

use anyhow::{Context, Result};
use console::{Term, style};

use crate::application::ports::DestroyConfirmer;

/// Confirms destructive actions by requiring the exact app name.
pub struct PromptConfirmer {
    /// Value of `--confirm`, if given.
    confirm: Option<String>,
    /// No TTY prompts (`--yes`, `CI`, `HEROKU_YES`).
    non_interactive: bool,
}

impl PromptConfirmer {
    #[must_use]
    pub fn new(confirm: Option<String>, non_interactive: bool) -> Self {
        Self {
            confirm,
            non_interactive,
        }
    }

    /// Decide without touching the terminal except through `ask`.
    fn decide(
        &self,
        app: &str,
        url: &str,
        ask: impl FnOnce(&str, &str) -> Result<String>,
    ) -> Result<bool> {
        if let Some(given) = &self.confirm {
            if given.trim() == app {
                return Ok(true);
            }
            warn(&format!("Confirmation did not match {app}. Aborted."));
            return Ok(false);
        }
        if self.non_interactive {
            warn(&format!(
                "Refusing to destroy {app} without confirmation. Re-run with --confirm {app}."
            ));
            return Ok(false);
        }
        let answer = ask(app, url)?;
        Ok(answer.trim() == app)
    }
}

fn warn(message: &str) {
    let _ = Term::stderr().write_line(&format!(" {}    {message}", style("!").yellow()));
}

fn prompt(app: &str, url: &str) -> Result<String> {
    warn(&style("WARNING: Potentially Destructive Action").bold().to_string());
    warn(&format!("This command will destroy {app} ({url})."));
    warn(&format!(
        "To proceed, type \"{app}\" or re-run this command with --confirm {app}"
    ));
    dialoguer::Input::<String>::new()
        .with_prompt(">")
        .allow_empty(true)
        .interact_text()
        .context("cannot read confirmation from terminal")
}

impl DestroyConfirmer for PromptConfirmer {
    fn confirm_destroy(&self, app: &str, url: &str) -> Result<bool> {
        self.decide(app, url, prompt)
    }
}
