//! `heroku destroy`: permanently destroy an app.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::lifecycle::Lifecycle;

#[derive(Args)]
pub struct DestroyArgs {
    /// Skip the prompt when APP matches the app being destroyed
    #[arg(long, value_name = "APP")]
    pub confirm: Option<String>,
}

/// Run the destroy command.
///
/// Declining the confirmation exits successfully without changes.
///
/// # Errors
///
/// Returns an error if no app can be resolved or a platform or git call
/// fails.
pub async fn run(app: &AppContext, args: &DestroyArgs) -> Result<()> {
    let platform = app.platform()?;
    let git = app.git();
    let resolver = app.resolver(&git);
    let confirmer = app.confirmer(args.confirm.as_deref());

    let reporter = app.reporter();
    let outcome = Lifecycle::new(&platform, &git)
        .destroy(&resolver, &confirmer, &reporter)
        .await?;
    reporter.finish();

    app.renderer().render_destroy(&outcome)
}
