//! `heroku list`: list your apps.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::app_query;

/// Run the list command.
///
/// # Errors
///
/// Returns an error if the platform cannot be queried.
pub async fn run(app: &AppContext) -> Result<()> {
    let platform = app.platform()?;
    let listing = app_query::list_apps(&platform).await?;
    app.renderer().render_list(&listing)
}
