//! `heroku create`: create a new app.

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::lifecycle::{CreateParams, Lifecycle};

#[derive(Args)]
pub struct CreateArgs {
    /// Name of the new app (assigned by the platform when omitted)
    pub name: Option<String>,

    /// The git remote to create [default: heroku]
    #[arg(short, long, value_name = "REMOTE")]
    pub remote: Option<String>,

    /// The stack on which to create the app
    #[arg(short, long, value_name = "STACK")]
    pub stack: Option<String>,

    /// Seconds to wait for the app to be provisioned [default: 30]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Comma-separated add-ons to install once provisioned
    #[arg(long, value_name = "LIST", default_value = "")]
    pub addons: String,
}

/// Run the create command.
///
/// # Errors
///
/// Returns an error if the create request, an add-on install or adding the
/// git remote fails. A provisioning timeout is reported, not returned.
pub async fn run(app: &AppContext, args: &CreateArgs) -> Result<()> {
    let platform = app.platform()?;
    let git = app.git();
    let defaults = &app.config.defaults;

    let reporter = app.reporter();
    let outcome = Lifecycle::new(&platform, &git)
        .create(
            CreateParams {
                name: args.name.as_deref(),
                remote: args.remote.as_deref().unwrap_or(&defaults.remote),
                stack: Some(args.stack.as_deref().unwrap_or(&defaults.stack)),
                timeout: Duration::from_secs(args.timeout.unwrap_or(defaults.timeout)),
                addons: &args.addons,
            },
            &reporter,
        )
        .await?;
    reporter.finish();

    app.renderer().render_create(&outcome)
}
