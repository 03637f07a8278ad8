//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use heroku_common::AppInfo;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

use crate::application::services::app_query::AppListing;
use crate::application::services::lifecycle::{CreateOutcome, DestroyOutcome, RenameOutcome};
use crate::domain::config::CliConfig;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `!`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "!".style(self.styles.warning));
        }
    }

    /// Print `Error: {msg}` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {msg}", "Error:".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }
}

/// Output mode dispatch: one variant per output format.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_list(&self, listing: &AppListing) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_list(listing);
                Ok(())
            }
            Self::Json(r) => r.render_list(listing),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the attributes cannot be serialized.
    pub fn render_info(&self, info: &AppInfo, raw: bool) -> Result<()> {
        match self {
            Self::Human(r) => r.render_info(info, raw),
            Self::Json(r) => r.render_info(info),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_create(&self, outcome: &CreateOutcome) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_create(outcome);
                Ok(())
            }
            Self::Json(r) => r.render_create(outcome),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_rename(&self, outcome: &RenameOutcome) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_rename(outcome);
                Ok(())
            }
            Self::Json(r) => r.render_rename(outcome),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_destroy(&self, outcome: &DestroyOutcome) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_destroy(outcome);
                Ok(())
            }
            Self::Json(r) => r.render_destroy(outcome),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_open(&self, url: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_open(url);
                Ok(())
            }
            Self::Json(r) => r.render_open(url),
        }
    }

    /// Log text as the platform returned it.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_logs(&self, text: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_logs(text);
                Ok(())
            }
            Self::Json(r) => r.render_logs(text),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &CliConfig, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(r) => r.render_config(config, path),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config_set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config_set(key, value);
                Ok(())
            }
            Self::Json(r) => r.render_config_set(key, value),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(r) => r.render_version(version),
        }
    }
}
