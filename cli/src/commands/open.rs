//! `heroku open`: open the app in a web browser.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::BrowserLauncher;
use crate::application::services::app_query;

/// Run the open command.
///
/// # Errors
///
/// Returns an error if no app can be resolved, the platform call fails or
/// the browser cannot be launched.
pub async fn run(app: &AppContext) -> Result<()> {
    let platform = app.platform()?;
    let git = app.git();
    let resolver = app.resolver(&git);
    let url = app_query::web_url(&platform, &resolver).await?;
    app.renderer().render_open(&url)?;
    app.browser().open(&url).await
}
