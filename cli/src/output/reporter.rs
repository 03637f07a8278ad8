//! `TerminalReporter`: Presentation-layer implementation of `ProgressReporter`.
//!
//! On a TTY each step gets a spinner that is finished by `success`, `warn`
//! or the next step. Elsewhere the step text is printed without a newline
//! and every `tick` appends a dot, so `Creating myapp..... done` still
//! shows progress in logs.

use std::cell::RefCell;
use std::io::Write as _;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

enum Open {
    None,
    Spinner { bar: ProgressBar, message: String },
    Line,
}

/// Terminal progress reporter that wraps an `OutputContext`.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    enabled: bool,
    open: RefCell<Open>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a reporter. A disabled reporter prints nothing (JSON mode).
    #[must_use]
    pub fn new(ctx: &'a OutputContext, enabled: bool) -> Self {
        Self {
            ctx,
            enabled: enabled && !ctx.quiet,
            open: RefCell::new(Open::None),
        }
    }

    /// Close whatever step is still open, treating it as finished.
    pub fn finish(&self) {
        match self.open.replace(Open::None) {
            Open::Spinner { bar, message } => progress::finish_ok(&bar, &message),
            Open::Line => println!(),
            Open::None => {}
        }
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        match self.open.replace(Open::None) {
            Open::Spinner { bar, .. } => bar.finish_and_clear(),
            Open::Line => println!(),
            Open::None => {}
        }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if !self.enabled {
            return;
        }
        self.finish();
        if self.ctx.show_progress() {
            *self.open.borrow_mut() = Open::Spinner {
                bar: progress::spinner(message),
                message: message.to_string(),
            };
        } else {
            print!("{message}");
            let _ = std::io::stdout().flush();
            *self.open.borrow_mut() = Open::Line;
        }
    }

    fn tick(&self) {
        if !self.enabled {
            return;
        }
        match &*self.open.borrow() {
            Open::Spinner { bar, .. } => bar.tick(),
            Open::Line => {
                print!(".");
                let _ = std::io::stdout().flush();
            }
            Open::None => {}
        }
    }

    fn success(&self, message: &str) {
        if !self.enabled {
            return;
        }
        match self.open.replace(Open::None) {
            Open::Spinner { bar, message: step } => {
                progress::finish_ok(&bar, &format!("{step} {message}"));
            }
            Open::Line => println!(" {message}"),
            Open::None => println!("  {} {message}", "✓".style(self.ctx.styles.success)),
        }
    }

    fn warn(&self, message: &str) {
        if !self.enabled {
            return;
        }
        match self.open.replace(Open::None) {
            Open::Spinner { bar, message: step } => progress::finish_warn(&bar, &step),
            Open::Line => println!(),
            Open::None => {}
        }
        println!("  {} {message}", "!".style(self.ctx.styles.warning));
    }
}
