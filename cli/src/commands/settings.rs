//! `heroku settings`: show and set CLI settings.

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service;

/// Settings subcommands.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show the effective settings
    Show,
    /// Change a setting
    Set {
        /// Setting key, e.g. defaults.remote
        key: String,
        /// New value
        value: String,
    },
}

/// Run the settings command.
///
/// # Errors
///
/// Returns an error for unknown keys, invalid values or I/O failures.
pub fn run(app: &AppContext, cmd: SettingsCommand) -> Result<()> {
    match cmd {
        SettingsCommand::Show => {
            let path = app.config_store.path()?;
            app.renderer().render_config(&app.config, &path)
        }
        SettingsCommand::Set { key, value } => {
            config_service::set_value(&app.config_store, &key, &value)?;
            app.renderer().render_config_set(&key, &value)
        }
    }
}
