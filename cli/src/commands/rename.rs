//! `heroku rename`: rename the app.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::lifecycle::Lifecycle;

#[derive(Args)]
pub struct RenameArgs {
    /// New name for the app
    pub newname: String,
}

/// Run the rename command.
///
/// # Errors
///
/// Returns `Invalid name.` for a blank new name, otherwise any platform or
/// git error.
pub async fn run(app: &AppContext, args: &RenameArgs) -> Result<()> {
    let platform = app.platform()?;
    let git = app.git();
    let resolver = app.resolver(&git);
    let outcome = Lifecycle::new(&platform, &git)
        .rename(&resolver, &args.newname)
        .await?;
    app.renderer().render_rename(&outcome)
}
