//! `heroku info`: show detailed app information.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::app_query;

#[derive(Args)]
pub struct InfoArgs {
    /// App to show (defaults to the current app)
    pub name: Option<String>,

    /// Output info as raw key/value pairs
    #[arg(short, long)]
    pub raw: bool,
}

/// Run the info command.
///
/// # Errors
///
/// Returns an error if no app can be resolved or the platform call fails.
pub async fn run(app: &AppContext, args: &InfoArgs) -> Result<()> {
    let platform = app.platform()?;
    let git = app.git();
    let resolver = app.resolver(&git);
    let info = app_query::app_info(&platform, &resolver, args.name.as_deref()).await?;
    app.renderer().render_info(&info, args.raw)
}
